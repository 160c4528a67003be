mod deadline_governor;

pub use deadline_governor::{CallClass, DeadlineGovernor};
