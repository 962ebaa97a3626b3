//! Visitor hierarchy - 二段目の dispatch
//!
//! # 二層構造
//! - **Visitor**: host 型ごとに handler を 1 つずつ持つ object-safe な trait。
//!   既定実装が Base visitor の振る舞い。
//! - **VisitHost<H>**: 引数の静的型 `H` で handler を選ぶ overload set。
//!   すべての `Visitor` に blanket impl されている。
//!
//! # 学習ポイント
//! - `VisitHost::<Host1>` と `VisitHost::<dyn Host>` は別の trait 実装なので、
//!   どちらが呼ばれるかはコンパイル時に引数の型で決まる
//! - `&dyn Host` を渡すと実体が Host1 でも汎用 handler になる（型の絞り込みは起きない）

use crate::domain::{HostKind, Visit, VisitorKind};
use crate::host::{Host, Host1, Host2, Host3};

/// Visitor は全 host 型に対する handler を持つ
///
/// 具象 visitor は `visit_host1..3` だけを上書きし、`visit_host` は上書きしない。
pub trait Visitor {
    fn kind(&self) -> VisitorKind;

    fn visit_host(&self, _host: &dyn Host) -> Visit {
        Visit::generic()
    }

    fn visit_host1(&self, _host: &Host1) -> Visit {
        Visit::new(VisitorKind::Base, HostKind::Host1)
    }

    fn visit_host2(&self, _host: &Host2) -> Visit {
        Visit::new(VisitorKind::Base, HostKind::Host2)
    }

    fn visit_host3(&self, _host: &Host3) -> Visit {
        Visit::new(VisitorKind::Base, HostKind::Host3)
    }
}

/// Handler selection by the argument's static type.
pub trait VisitHost<H: ?Sized> {
    fn visit(&self, host: &H) -> Visit;
}

impl<'h, V: Visitor + ?Sized> VisitHost<dyn Host + 'h> for V {
    fn visit(&self, host: &(dyn Host + 'h)) -> Visit {
        self.visit_host(host)
    }
}

impl<V: Visitor + ?Sized> VisitHost<Host1> for V {
    fn visit(&self, host: &Host1) -> Visit {
        self.visit_host1(host)
    }
}

impl<V: Visitor + ?Sized> VisitHost<Host2> for V {
    fn visit(&self, host: &Host2) -> Visit {
        self.visit_host2(host)
    }
}

impl<V: Visitor + ?Sized> VisitHost<Host3> for V {
    fn visit(&self, host: &Host3) -> Visit {
        self.visit_host3(host)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BaseVisitor;

impl Visitor for BaseVisitor {
    fn kind(&self) -> VisitorKind {
        VisitorKind::Base
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Visitor1;

impl Visitor for Visitor1 {
    fn kind(&self) -> VisitorKind {
        VisitorKind::Visitor1
    }

    fn visit_host1(&self, _host: &Host1) -> Visit {
        Visit::new(VisitorKind::Visitor1, HostKind::Host1)
    }

    fn visit_host2(&self, _host: &Host2) -> Visit {
        Visit::new(VisitorKind::Visitor1, HostKind::Host2)
    }

    fn visit_host3(&self, _host: &Host3) -> Visit {
        Visit::new(VisitorKind::Visitor1, HostKind::Host3)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Visitor2;

impl Visitor for Visitor2 {
    fn kind(&self) -> VisitorKind {
        VisitorKind::Visitor2
    }

    fn visit_host1(&self, _host: &Host1) -> Visit {
        Visit::new(VisitorKind::Visitor2, HostKind::Host1)
    }

    fn visit_host2(&self, _host: &Host2) -> Visit {
        Visit::new(VisitorKind::Visitor2, HostKind::Host2)
    }

    fn visit_host3(&self, _host: &Host3) -> Visit {
        Visit::new(VisitorKind::Visitor2, HostKind::Host3)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Visitor3;

impl Visitor for Visitor3 {
    fn kind(&self) -> VisitorKind {
        VisitorKind::Visitor3
    }

    fn visit_host1(&self, _host: &Host1) -> Visit {
        Visit::new(VisitorKind::Visitor3, HostKind::Host1)
    }

    fn visit_host2(&self, _host: &Host2) -> Visit {
        Visit::new(VisitorKind::Visitor3, HostKind::Host2)
    }

    fn visit_host3(&self, _host: &Host3) -> Visit {
        Visit::new(VisitorKind::Visitor3, HostKind::Host3)
    }
}

/// Build a visitor for `kind`, widened to the base capability.
pub fn build_visitor(kind: VisitorKind) -> Box<dyn Visitor> {
    match kind {
        VisitorKind::Base => Box::new(BaseVisitor),
        VisitorKind::Visitor1 => Box::new(Visitor1),
        VisitorKind::Visitor2 => Box::new(Visitor2),
        VisitorKind::Visitor3 => Box::new(Visitor3),
    }
}
