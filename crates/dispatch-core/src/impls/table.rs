//! TableDispatch - (HostKind, VisitorKind) をキーにした handler 表
//!
//! # 学習ポイント
//! - 継承と overload に頼らず、tagged enum のペアで `match` する
//! - HashMap<(HostKind, VisitorKind), Box<dyn Fn() -> Visit>> で handler を管理
//! - 二重登録と未登録はどちらも DispatchError になる

use std::collections::HashMap;

use crate::domain::{HostKind, Visit, VisitorKind};
use crate::error::DispatchError;
use crate::host::Host;
use crate::ports::DispatchStrategy;
use crate::visitor::Visitor;

/// Pair resolution by pattern matching on both tags.
///
/// A base host only ever reaches the generic handler, which no visitor overrides.
pub fn resolve(host: HostKind, visitor: VisitorKind) -> Visit {
    match (host, visitor) {
        (HostKind::Base, _) => Visit::generic(),
        (host, visitor) => Visit::new(visitor, host),
    }
}

type BoxedHandler = Box<dyn Fn() -> Visit>;

/// DispatchTable は (host, visitor) ごとの handler を保持
///
/// # 使用例
/// ```ignore
/// let mut table = DispatchTable::new();
/// table.register(HostKind::Host1, VisitorKind::Visitor1, || {
///     Visit::new(VisitorKind::Visitor1, HostKind::Host1)
/// })?;
/// let visit = table.call(HostKind::Host1, VisitorKind::Visitor1)?;
/// ```
#[derive(Default)]
pub struct DispatchTable {
    handlers: HashMap<(HostKind, VisitorKind), BoxedHandler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Every host kind × visitor kind, base variants included.
    pub fn standard() -> Self {
        let handlers = HostKind::ALL
            .into_iter()
            .flat_map(|host| {
                VisitorKind::ALL.into_iter().map(move |visitor| {
                    let handler: BoxedHandler = Box::new(move || resolve(host, visitor));
                    ((host, visitor), handler)
                })
            })
            .collect();
        Self { handlers }
    }

    pub fn register<F>(
        &mut self,
        host: HostKind,
        visitor: VisitorKind,
        handler: F,
    ) -> Result<(), DispatchError>
    where
        F: Fn() -> Visit + 'static,
    {
        if self.handlers.contains_key(&(host, visitor)) {
            return Err(DispatchError::AlreadyRegistered { host, visitor });
        }
        self.handlers.insert((host, visitor), Box::new(handler));
        Ok(())
    }

    pub fn call(&self, host: HostKind, visitor: VisitorKind) -> Result<Visit, DispatchError> {
        let handler = self
            .handlers
            .get(&(host, visitor))
            .ok_or(DispatchError::HandlerNotFound { host, visitor })?;
        Ok(handler())
    }

    pub fn contains(&self, host: HostKind, visitor: VisitorKind) -> bool {
        self.handlers.contains_key(&(host, visitor))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

pub struct TableDispatch {
    table: DispatchTable,
}

impl TableDispatch {
    pub fn new(table: DispatchTable) -> Self {
        Self { table }
    }
}

impl Default for TableDispatch {
    fn default() -> Self {
        Self::new(DispatchTable::standard())
    }
}

impl DispatchStrategy for TableDispatch {
    fn name(&self) -> &'static str {
        "table"
    }

    fn dispatch(&self, host: &dyn Host, visitor: &dyn Visitor) -> Result<Visit, DispatchError> {
        self.table.call(host.kind(), visitor.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::build_host;
    use crate::impls::DoubleDispatch;
    use crate::visitor::build_visitor;

    #[test]
    fn standard_table_is_complete() {
        let table = DispatchTable::standard();
        assert_eq!(table.len(), HostKind::ALL.len() * VisitorKind::ALL.len());
        for host in HostKind::ALL {
            for visitor in VisitorKind::ALL {
                assert!(table.contains(host, visitor));
            }
        }
    }

    #[test]
    fn table_agrees_with_double_dispatch() {
        let table = TableDispatch::default();
        let double = DoubleDispatch::new();

        for host_kind in HostKind::ALL {
            for visitor_kind in VisitorKind::ALL {
                let host = build_host(host_kind);
                let visitor = build_visitor(visitor_kind);
                assert_eq!(
                    table.dispatch(host.as_ref(), visitor.as_ref()).unwrap(),
                    double.dispatch(host.as_ref(), visitor.as_ref()).unwrap(),
                );
            }
        }
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut table = DispatchTable::new();
        table
            .register(HostKind::Host1, VisitorKind::Visitor1, Visit::generic)
            .unwrap();
        let result = table.register(HostKind::Host1, VisitorKind::Visitor1, Visit::generic);
        assert!(matches!(
            result,
            Err(DispatchError::AlreadyRegistered {
                host: HostKind::Host1,
                visitor: VisitorKind::Visitor1,
            })
        ));
    }

    #[test]
    fn missing_handler_is_an_error() {
        let strategy = TableDispatch::new(DispatchTable::new());
        let host = build_host(HostKind::Host2);
        let visitor = build_visitor(VisitorKind::Visitor3);

        let err = strategy
            .dispatch(host.as_ref(), visitor.as_ref())
            .unwrap_err();
        assert!(err.to_string().contains("handler not found"));
    }

    #[test]
    fn resolve_never_credits_a_concrete_visitor_for_the_base_host() {
        for visitor in VisitorKind::ALL {
            assert_eq!(resolve(HostKind::Base, visitor), Visit::generic());
        }
    }
}
