//! dispatch-core
//!
//! Double dispatch の最小構成。
//!
//! # モジュール構成
//! - **domain**: HostKind / VisitorKind / Visit（どの handler が動いたかの記録）
//! - **host**: Host trait と BaseHost, Host1, Host2, Host3
//! - **visitor**: Visitor trait（host 型ごとの handler）と VisitHost（overload set）
//! - **ports**: DispatchStrategy trait
//! - **impls**: DoubleDispatch, DirectDispatch, TableDispatch
//! - **driver**: Roster × strategy の全組み合わせを実行して Transcript を返す
//! - **config**: 環境変数からの RunConfig
//! - **error**: DispatchError

pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod host;
pub mod impls;
pub mod ports;
pub mod visitor;

pub use self::domain::{HostKind, Visit, VisitorKind};
pub use self::error::DispatchError;
pub use self::host::Host;
pub use self::ports::DispatchStrategy;
pub use self::visitor::{VisitHost, Visitor};
