//! DoubleDispatch - host に visitor を渡し、host が自分を visitor に渡し返す

use crate::domain::Visit;
use crate::error::DispatchError;
use crate::host::Host;
use crate::ports::DispatchStrategy;
use crate::visitor::Visitor;

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleDispatch;

impl DoubleDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchStrategy for DoubleDispatch {
    fn name(&self) -> &'static str {
        "double"
    }

    fn dispatch(&self, host: &dyn Host, visitor: &dyn Visitor) -> Result<Visit, DispatchError> {
        Ok(host.accept(visitor))
    }
}
