//! Domain model: host/visitor kinds and the record of a single visit.

pub mod kind;
pub mod visit;

pub use self::kind::{HostKind, VisitorKind};
pub use self::visit::Visit;
