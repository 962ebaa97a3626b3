//! Visit: which handler ran, recorded as (visitor kind, host kind).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::{HostKind, VisitorKind};

/// One executed handler.
///
/// The generic handler always records `(Base, Base)`, whichever visitor ran it,
/// because no concrete visitor overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visit {
    pub visitor: VisitorKind,
    pub host: HostKind,
}

impl Visit {
    pub const fn new(visitor: VisitorKind, host: HostKind) -> Self {
        Self { visitor, host }
    }

    /// The record produced by the generic (base host) handler.
    pub const fn generic() -> Self {
        Self::new(VisitorKind::Base, HostKind::Base)
    }

    /// Did the generic handler fire?
    pub fn is_generic(&self) -> bool {
        self.host == HostKind::Base
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} visiting {}", self.visitor.label(), self.host.label())
    }
}
