//! Impls - DispatchStrategy の実装
//!
//! # 含まれる実装
//! - **DoubleDispatch**: 既定。二段の single dispatch で両方の型に応じた handler を選ぶ
//! - **DirectDispatch**: 比較用。常に汎用 handler に落ちる
//! - **TableDispatch**: tagged enum のペアで表引きする

pub mod direct;
pub mod double;
pub mod table;

pub use self::direct::DirectDispatch;
pub use self::double::DoubleDispatch;
pub use self::table::{DispatchTable, TableDispatch, resolve};
