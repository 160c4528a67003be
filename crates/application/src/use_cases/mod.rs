pub mod bootparam;
pub mod yp;

pub use bootparam::WhoamiUseCase;
pub use yp::{CheckDomainUseCase, DumpMapUseCase, DumpSummary, ListMapsUseCase};
