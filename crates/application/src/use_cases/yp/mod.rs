mod check_domain;
mod dump_map;
mod list_maps;

pub use check_domain::CheckDomainUseCase;
pub use dump_map::{DumpMapUseCase, DumpSummary};
pub use list_maps::ListMapsUseCase;
