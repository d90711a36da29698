//! Guided financial-flow steps and their view mapping.
//!
//! A single table backs every lookup in this module: step to view, view to
//! step, and view to breadcrumb label. Adding a step means adding one row.

use crate::error::ParseError;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six guided steps of a financial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialFlowStep {
    SendQr,
    CallBuyer,
    ReserveEscrow,
    Testing,
    LcIssued,
    Release,
}

struct StepRow {
    step: FinancialFlowStep,
    tag: &'static str,
    view: ViewId,
    label: &'static str,
}

/// Ordered as the flow is walked.
static STEP_TABLE: [StepRow; 6] = [
    StepRow {
        step: FinancialFlowStep::SendQr,
        tag: "send-qr",
        view: ViewId::FinanceSendQr,
        label: "Send QR",
    },
    StepRow {
        step: FinancialFlowStep::CallBuyer,
        tag: "call-buyer",
        view: ViewId::FinanceCallBuyer,
        label: "Call Buyer",
    },
    StepRow {
        step: FinancialFlowStep::ReserveEscrow,
        tag: "reserve-escrow",
        view: ViewId::FinanceReserveEscrow,
        label: "Reserve Escrow",
    },
    StepRow {
        step: FinancialFlowStep::Testing,
        tag: "testing",
        view: ViewId::FinanceTesting,
        label: "Testing",
    },
    StepRow {
        step: FinancialFlowStep::LcIssued,
        tag: "lc-issued",
        view: ViewId::FinanceLcIssued,
        label: "LC Issued",
    },
    StepRow {
        step: FinancialFlowStep::Release,
        tag: "release",
        view: ViewId::FinanceRelease,
        label: "Release",
    },
];

impl FinancialFlowStep {
    pub fn all() -> [FinancialFlowStep; 6] {
        [
            FinancialFlowStep::SendQr,
            FinancialFlowStep::CallBuyer,
            FinancialFlowStep::ReserveEscrow,
            FinancialFlowStep::Testing,
            FinancialFlowStep::LcIssued,
            FinancialFlowStep::Release,
        ]
    }

    fn row(&self) -> &'static StepRow {
        // Rows are declared in variant order.
        &STEP_TABLE[self.position()]
    }

    /// Zero-based position in the flow.
    pub fn position(&self) -> usize {
        match self {
            FinancialFlowStep::SendQr => 0,
            FinancialFlowStep::CallBuyer => 1,
            FinancialFlowStep::ReserveEscrow => 2,
            FinancialFlowStep::Testing => 3,
            FinancialFlowStep::LcIssued => 4,
            FinancialFlowStep::Release => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.row().tag
    }

    /// The `finance-` prefixed view that renders this step.
    pub fn view(&self) -> ViewId {
        self.row().view
    }

    /// Human-readable label used in breadcrumbs.
    pub fn label(&self) -> &'static str {
        self.row().label
    }

    pub fn next(&self) -> Option<FinancialFlowStep> {
        STEP_TABLE.get(self.position() + 1).map(|row| row.step)
    }

    pub fn previous(&self) -> Option<FinancialFlowStep> {
        self.position()
            .checked_sub(1)
            .and_then(|idx| STEP_TABLE.get(idx))
            .map(|row| row.step)
    }
}

/// Inverse lookup: which step a `finance-*` view renders.
pub fn view_to_step(view: ViewId) -> Option<FinancialFlowStep> {
    STEP_TABLE
        .iter()
        .find(|row| row.view == view)
        .map(|row| row.step)
}

/// Breadcrumb label for a `finance-*` view.
pub fn view_to_step_label(view: ViewId) -> Option<&'static str> {
    STEP_TABLE
        .iter()
        .find(|row| row.view == view)
        .map(|row| row.label)
}

impl fmt::Display for FinancialFlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancialFlowStep {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STEP_TABLE
            .iter()
            .find(|row| row.tag == s.trim())
            .map(|row| row.step)
            .ok_or_else(|| ParseError::UnknownFlowStep(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rows_follow_variant_order() {
        for (idx, row) in STEP_TABLE.iter().enumerate() {
            assert_eq!(row.step.position(), idx);
        }
    }

    #[test]
    fn test_step_view_is_finance_prefixed_tag() {
        for step in FinancialFlowStep::all() {
            assert_eq!(step.view().as_str(), format!("finance-{}", step.as_str()));
        }
    }

    #[test]
    fn test_step_view_round_trip() {
        let mut views = HashSet::new();
        for step in FinancialFlowStep::all() {
            assert!(views.insert(step.view()));
            assert_eq!(view_to_step(step.view()), Some(step));
            assert_eq!(view_to_step_label(step.view()), Some(step.label()));
        }
        assert_eq!(views.len(), 6);
    }

    #[test]
    fn test_non_flow_views_have_no_step() {
        for view in ViewId::all().iter().filter(|v| !v.is_flow_step()) {
            assert_eq!(view_to_step(*view), None);
            assert_eq!(view_to_step_label(*view), None);
        }
    }

    #[test]
    fn test_reserve_escrow_label() {
        assert_eq!(
            view_to_step_label(ViewId::FinanceReserveEscrow),
            Some("Reserve Escrow")
        );
    }

    #[test]
    fn test_next_and_previous_walk_the_flow() {
        assert_eq!(FinancialFlowStep::SendQr.previous(), None);
        assert_eq!(FinancialFlowStep::Release.next(), None);
        assert_eq!(
            FinancialFlowStep::Testing.next(),
            Some(FinancialFlowStep::LcIssued)
        );
        assert_eq!(
            FinancialFlowStep::Testing.previous(),
            Some(FinancialFlowStep::ReserveEscrow)
        );
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(
            "lc-issued".parse::<FinancialFlowStep>().unwrap(),
            FinancialFlowStep::LcIssued
        );
        assert!("lc_issued".parse::<FinancialFlowStep>().is_err());
    }
}
