//! DispatchStrategy port - (host, visitor) の組から handler を選ぶ
//!
//! # 実装
//! - DoubleDispatch: host.accept(visitor) の二段呼び出し
//! - DirectDispatch: visitor に汎用 host として直接渡す（正しく解決できない例）
//! - TableDispatch: (HostKind, VisitorKind) をキーにした表引き

use crate::domain::Visit;
use crate::error::DispatchError;
use crate::host::Host;
use crate::visitor::Visitor;

/// DispatchStrategy は host と visitor の実体から handler を 1 つ実行する
///
/// 引数はどちらも trait object（静的型は base capability に広げてある）。
pub trait DispatchStrategy {
    fn name(&self) -> &'static str;

    fn dispatch(&self, host: &dyn Host, visitor: &dyn Visitor) -> Result<Visit, DispatchError>;
}
