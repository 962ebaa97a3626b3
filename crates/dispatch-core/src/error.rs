use thiserror::Error;

use crate::domain::{HostKind, VisitorKind};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown dispatch strategy: {0}")]
    UnknownStrategy(String),

    #[error("handler for host={host} visitor={visitor} is already registered")]
    AlreadyRegistered { host: HostKind, visitor: VisitorKind },

    #[error("handler not found for host={host} visitor={visitor}")]
    HandlerNotFound { host: HostKind, visitor: VisitorKind },

    #[error("write report: {0}")]
    Io(#[from] std::io::Error),
}
