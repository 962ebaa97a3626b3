//! Driver: every host × every visitor, in a fixed order.
//!
//! `run` does not print. It returns a `Transcript`, and the caller decides
//! where the lines go.

use std::io;

use tracing::{debug, info};

use crate::domain::{HostKind, Visit, VisitorKind};
use crate::error::DispatchError;
use crate::host::{Host, build_host};
use crate::ports::DispatchStrategy;
use crate::visitor::{Visitor, build_visitor};

/// Ordered hosts and visitors, each widened to the base capability.
pub struct Roster {
    hosts: Vec<Box<dyn Host>>,
    visitors: Vec<Box<dyn Visitor>>,
}

impl Roster {
    pub fn new(hosts: Vec<Box<dyn Host>>, visitors: Vec<Box<dyn Visitor>>) -> Self {
        Self { hosts, visitors }
    }

    pub fn from_kinds(hosts: &[HostKind], visitors: &[VisitorKind]) -> Self {
        Self::new(
            hosts.iter().copied().map(build_host).collect(),
            visitors.iter().copied().map(build_visitor).collect(),
        )
    }

    /// Host1, Host2, Host3 against Visitor1, Visitor2, Visitor3.
    pub fn standard() -> Self {
        Self::from_kinds(&HostKind::CONCRETE, &VisitorKind::CONCRETE)
    }

    pub fn hosts(&self) -> &[Box<dyn Host>] {
        &self.hosts
    }

    pub fn visitors(&self) -> &[Box<dyn Visitor>] {
        &self.visitors
    }

    pub fn pairs(&self) -> usize {
        self.hosts.len() * self.visitors.len()
    }
}

/// Visits in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    visits: Vec<Visit>,
}

impl Transcript {
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { visits }
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.visits.iter().map(Visit::to_string).collect()
    }

    /// One line per visit.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), DispatchError> {
        for visit in &self.visits {
            writeln!(out, "{visit}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Outer loop over hosts, inner loop over visitors.
pub fn run(roster: &Roster, strategy: &dyn DispatchStrategy) -> Result<Transcript, DispatchError> {
    let mut visits = Vec::with_capacity(roster.pairs());

    for host in roster.hosts() {
        for visitor in roster.visitors() {
            let visit = strategy.dispatch(host.as_ref(), visitor.as_ref())?;
            debug!(
                host = %host.kind(),
                visitor = %visitor.kind(),
                %visit,
                "dispatched"
            );
            visits.push(visit);
        }
    }

    info!(strategy = strategy.name(), visits = visits.len(), "run complete");
    Ok(Transcript::new(visits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::{DirectDispatch, DoubleDispatch, TableDispatch};
    use std::collections::HashSet;

    const EXPECTED: [&str; 9] = [
        "Visitor1 visiting Host1",
        "Visitor2 visiting Host1",
        "Visitor3 visiting Host1",
        "Visitor1 visiting Host2",
        "Visitor2 visiting Host2",
        "Visitor3 visiting Host2",
        "Visitor1 visiting Host3",
        "Visitor2 visiting Host3",
        "Visitor3 visiting Host3",
    ];

    #[test]
    fn standard_run_covers_the_grid_in_order() {
        let transcript = run(&Roster::standard(), &DoubleDispatch::new()).unwrap();
        assert_eq!(transcript.lines(), EXPECTED);
    }

    #[test]
    fn standard_run_has_no_duplicates() {
        let transcript = run(&Roster::standard(), &DoubleDispatch::new()).unwrap();
        let unique: HashSet<_> = transcript.visits().iter().collect();
        assert_eq!(unique.len(), 9);
        assert!(transcript.visits().iter().all(|v| !v.is_generic()));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let roster = Roster::standard();
        let strategy = DoubleDispatch::new();

        let first = run(&roster, &strategy).unwrap();
        let second = run(&roster, &strategy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn table_strategy_produces_the_same_report() {
        let transcript = run(&Roster::standard(), &TableDispatch::default()).unwrap();
        assert_eq!(transcript.lines(), EXPECTED);
    }

    #[test]
    fn direct_strategy_collapses_to_generic() {
        let transcript = run(&Roster::standard(), &DirectDispatch::new()).unwrap();
        assert_eq!(transcript.len(), 9);
        assert!(transcript.visits().iter().all(Visit::is_generic));
    }

    #[test]
    fn write_to_emits_one_line_per_visit() {
        let transcript = run(&Roster::standard(), &DoubleDispatch::new()).unwrap();
        let mut buf = Vec::new();
        transcript.write_to(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), EXPECTED);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn empty_roster_yields_empty_transcript() {
        let roster = Roster::from_kinds(&[], &VisitorKind::CONCRETE);
        let transcript = run(&roster, &DoubleDispatch::new()).unwrap();
        assert!(transcript.is_empty());
    }
}
