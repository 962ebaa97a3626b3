//! DirectDispatch - visitor に host を直接渡す
//!
//! host の参照は `&dyn Host` なので、選ばれる overload は常に汎用 handler。
//! 実体が Host1..3 でも型は絞り込まれない。二段呼び出しが必要な理由を示すための実装。

use crate::domain::Visit;
use crate::error::DispatchError;
use crate::host::Host;
use crate::ports::DispatchStrategy;
use crate::visitor::{VisitHost, Visitor};

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDispatch;

impl DirectDispatch {
    pub fn new() -> Self {
        Self
    }
}

impl DispatchStrategy for DirectDispatch {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn dispatch(&self, host: &dyn Host, visitor: &dyn Visitor) -> Result<Visit, DispatchError> {
        Ok(VisitHost::<dyn Host>::visit(visitor, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HostKind, VisitorKind};
    use crate::host::build_host;
    use crate::visitor::build_visitor;

    #[test]
    fn concrete_hosts_are_not_narrowed() {
        for host_kind in HostKind::CONCRETE {
            for visitor_kind in VisitorKind::CONCRETE {
                let host = build_host(host_kind);
                let visitor = build_visitor(visitor_kind);

                let visit = DirectDispatch::new()
                    .dispatch(host.as_ref(), visitor.as_ref())
                    .unwrap();

                assert!(visit.is_generic(), "{host_kind} x {visitor_kind} was narrowed");
                assert_eq!(visit.to_string(), "Base visitor visiting base host");
            }
        }
    }
}
