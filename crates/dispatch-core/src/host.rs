//! Host hierarchy - 一段目の dispatch
//!
//! # 学習ポイント
//! - `accept` は trait object (`&dyn Host`) 経由で呼ばれ、vtable で実体の impl が選ばれる（動的 dispatch #1）
//! - 各 impl の中では `self` の静的型が具象型なので、`VisitHost::<Self>` で
//!   visitor 側の overload を静的に選べる
//! - 本体が同じに見えても impl ごとに書く必要がある（`Self` が impl ごとに違うため）

use crate::domain::{HostKind, Visit};
use crate::visitor::{VisitHost, Visitor};

/// Host は自分自身を visitor に渡す
pub trait Host {
    fn kind(&self) -> HostKind;

    /// Hand `self` to the visitor's handler matching the implementor's own type.
    fn accept(&self, visitor: &dyn Visitor) -> Visit;
}

/// The generic host: only the base capability is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseHost;

impl Host for BaseHost {
    fn kind(&self) -> HostKind {
        HostKind::Base
    }

    fn accept(&self, visitor: &dyn Visitor) -> Visit {
        VisitHost::<dyn Host>::visit(visitor, self as &dyn Host)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Host1;

impl Host for Host1 {
    fn kind(&self) -> HostKind {
        HostKind::Host1
    }

    fn accept(&self, visitor: &dyn Visitor) -> Visit {
        VisitHost::<Self>::visit(visitor, self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Host2;

impl Host for Host2 {
    fn kind(&self) -> HostKind {
        HostKind::Host2
    }

    fn accept(&self, visitor: &dyn Visitor) -> Visit {
        VisitHost::<Self>::visit(visitor, self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Host3;

impl Host for Host3 {
    fn kind(&self) -> HostKind {
        HostKind::Host3
    }

    fn accept(&self, visitor: &dyn Visitor) -> Visit {
        VisitHost::<Self>::visit(visitor, self)
    }
}

/// Build a host for `kind`, widened to the base capability.
pub fn build_host(kind: HostKind) -> Box<dyn Host> {
    match kind {
        HostKind::Base => Box::new(BaseHost),
        HostKind::Host1 => Box::new(Host1),
        HostKind::Host2 => Box::new(Host2),
        HostKind::Host3 => Box::new(Host3),
    }
}
