pub mod collector;
pub mod inspect;
pub mod lister;
pub mod record;
pub mod report;
pub mod source;

pub use collector::Collector;
pub use record::{ContainerRecord, ContainerState};
pub use report::Snapshot;
pub use source::{ContainerSource, RuntimeSource};
