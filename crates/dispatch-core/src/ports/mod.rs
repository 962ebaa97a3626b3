//! Ports - dispatch の抽象化
//!
//! driver は `DispatchStrategy` だけを知っていて、実装（impls）の詳細は知らない。

pub mod dispatch;

pub use self::dispatch::DispatchStrategy;
