pub mod cursor;
pub mod names;
pub mod reply;
pub mod request;
pub mod status;

pub use cursor::MapCursor;
pub use names::{MapName, NisDomain, YPMAXDOMAIN, YPMAXMAP, YPMAXRECORD};
pub use reply::{Entry, FetchOutcome, KeyValReply, MapListReply};
pub use request::MapRequest;
pub use status::{YpError, YpStatus};
