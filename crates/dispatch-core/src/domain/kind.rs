//! HostKind / VisitorKind - 閉じた variant の列挙
//!
//! # 学習ポイント
//! - 継承階層の代わりに tagged enum でバリアントを列挙する
//! - `match` の網羅性チェックで「handler の書き忘れ」をコンパイル時に検出できる

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host の種類。`Base` は汎用 Host（具象型が分からない状態）を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    Base,
    Host1,
    Host2,
    Host3,
}

impl HostKind {
    pub const ALL: [HostKind; 4] = [
        HostKind::Base,
        HostKind::Host1,
        HostKind::Host2,
        HostKind::Host3,
    ];

    /// Concrete variants in construction order.
    pub const CONCRETE: [HostKind; 3] = [HostKind::Host1, HostKind::Host2, HostKind::Host3];

    pub fn as_str(self) -> &'static str {
        match self {
            HostKind::Base => "base",
            HostKind::Host1 => "host1",
            HostKind::Host2 => "host2",
            HostKind::Host3 => "host3",
        }
    }

    /// Wording used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            HostKind::Base => "base host",
            HostKind::Host1 => "Host1",
            HostKind::Host2 => "Host2",
            HostKind::Host3 => "Host3",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visitor の種類。`Base` は既定の振る舞いだけを持つ visitor。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorKind {
    Base,
    Visitor1,
    Visitor2,
    Visitor3,
}

impl VisitorKind {
    pub const ALL: [VisitorKind; 4] = [
        VisitorKind::Base,
        VisitorKind::Visitor1,
        VisitorKind::Visitor2,
        VisitorKind::Visitor3,
    ];

    pub const CONCRETE: [VisitorKind; 3] = [
        VisitorKind::Visitor1,
        VisitorKind::Visitor2,
        VisitorKind::Visitor3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisitorKind::Base => "base",
            VisitorKind::Visitor1 => "visitor1",
            VisitorKind::Visitor2 => "visitor2",
            VisitorKind::Visitor3 => "visitor3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisitorKind::Base => "Base visitor",
            VisitorKind::Visitor1 => "Visitor1",
            VisitorKind::Visitor2 => "Visitor2",
            VisitorKind::Visitor3 => "Visitor3",
        }
    }
}

impl fmt::Display for VisitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_variants_use_base_wording() {
        assert_eq!(HostKind::Base.label(), "base host");
        assert_eq!(VisitorKind::Base.label(), "Base visitor");
    }

    #[test]
    fn concrete_lists_exclude_base() {
        assert!(!HostKind::CONCRETE.contains(&HostKind::Base));
        assert!(!VisitorKind::CONCRETE.contains(&VisitorKind::Base));
    }

    #[test]
    fn kinds_serialize_as_snake_case() {
        assert_eq!(serde_json::to_string(&HostKind::Host2).unwrap(), "\"host2\"");
        assert_eq!(serde_json::to_string(&VisitorKind::Base).unwrap(), "\"base\"");
    }
}
