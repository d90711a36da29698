//! View identifiers for every admin screen.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// VIEW IDENTIFIER
// ============================================================================

/// Identifies which top-level screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    #[default]
    Dashboard,
    Users,
    Minerals,
    MineralDetail,
    MineralForm,
    Orders,
    OrdersOrderDetail,
    SellOrderDetail,
    BuyOrderDetail,
    SellSubmissionDetail,
    Enquiries,
    Finance,
    FinanceSendQr,
    FinanceCallBuyer,
    FinanceReserveEscrow,
    FinanceTesting,
    FinanceLcIssued,
    FinanceRelease,
    Content,
    Analytics,
    Disputes,
    Partners,
    Logistics,
    Insurance,
    Settings,
    AuditLog,
    CallHistory,
    Profile,
    Help,
    Notifications,
    Search,
}

/// Partition of the view space by what a view needs before it can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Needs a matching order-detail ref.
    Detail,
    /// Needs a specific params field.
    Parameterized,
    /// One of the six guided financial-flow steps.
    Flow,
    /// No precondition.
    Simple,
}

impl ViewId {
    pub fn all() -> &'static [ViewId] {
        &[
            ViewId::Dashboard,
            ViewId::Users,
            ViewId::Minerals,
            ViewId::MineralDetail,
            ViewId::MineralForm,
            ViewId::Orders,
            ViewId::OrdersOrderDetail,
            ViewId::SellOrderDetail,
            ViewId::BuyOrderDetail,
            ViewId::SellSubmissionDetail,
            ViewId::Enquiries,
            ViewId::Finance,
            ViewId::FinanceSendQr,
            ViewId::FinanceCallBuyer,
            ViewId::FinanceReserveEscrow,
            ViewId::FinanceTesting,
            ViewId::FinanceLcIssued,
            ViewId::FinanceRelease,
            ViewId::Content,
            ViewId::Analytics,
            ViewId::Disputes,
            ViewId::Partners,
            ViewId::Logistics,
            ViewId::Insurance,
            ViewId::Settings,
            ViewId::AuditLog,
            ViewId::CallHistory,
            ViewId::Profile,
            ViewId::Help,
            ViewId::Notifications,
            ViewId::Search,
        ]
    }

    /// The kebab-case tag used by screens and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Users => "users",
            ViewId::Minerals => "minerals",
            ViewId::MineralDetail => "mineral-detail",
            ViewId::MineralForm => "mineral-form",
            ViewId::Orders => "orders",
            ViewId::OrdersOrderDetail => "orders-order-detail",
            ViewId::SellOrderDetail => "sell-order-detail",
            ViewId::BuyOrderDetail => "buy-order-detail",
            ViewId::SellSubmissionDetail => "sell-submission-detail",
            ViewId::Enquiries => "enquiries",
            ViewId::Finance => "finance",
            ViewId::FinanceSendQr => "finance-send-qr",
            ViewId::FinanceCallBuyer => "finance-call-buyer",
            ViewId::FinanceReserveEscrow => "finance-reserve-escrow",
            ViewId::FinanceTesting => "finance-testing",
            ViewId::FinanceLcIssued => "finance-lc-issued",
            ViewId::FinanceRelease => "finance-release",
            ViewId::Content => "content",
            ViewId::Analytics => "analytics",
            ViewId::Disputes => "disputes",
            ViewId::Partners => "partners",
            ViewId::Logistics => "logistics",
            ViewId::Insurance => "insurance",
            ViewId::Settings => "settings",
            ViewId::AuditLog => "audit-log",
            ViewId::CallHistory => "call-history",
            ViewId::Profile => "profile",
            ViewId::Help => "help",
            ViewId::Notifications => "notifications",
            ViewId::Search => "search",
        }
    }

    /// Screen heading shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Users => "Users & KYC",
            ViewId::Minerals => "Minerals",
            ViewId::MineralDetail => "Mineral Detail",
            ViewId::MineralForm => "Edit Mineral",
            ViewId::Orders => "Orders & Transactions",
            ViewId::OrdersOrderDetail => "Order Detail",
            ViewId::SellOrderDetail => "Sell Order",
            ViewId::BuyOrderDetail => "Buy Order",
            ViewId::SellSubmissionDetail => "Sell Submission",
            ViewId::Enquiries => "Enquiries",
            ViewId::Finance => "Finance",
            ViewId::FinanceSendQr
            | ViewId::FinanceCallBuyer
            | ViewId::FinanceReserveEscrow
            | ViewId::FinanceTesting
            | ViewId::FinanceLcIssued
            | ViewId::FinanceRelease => "Financial Flow",
            ViewId::Content => "Content",
            ViewId::Analytics => "Analytics",
            ViewId::Disputes => "Disputes",
            ViewId::Partners => "Partners",
            ViewId::Logistics => "Logistics",
            ViewId::Insurance => "Insurance",
            ViewId::Settings => "Settings",
            ViewId::AuditLog => "Audit Log",
            ViewId::CallHistory => "Call History",
            ViewId::Profile => "Profile",
            ViewId::Help => "Help",
            ViewId::Notifications => "Notifications",
            ViewId::Search => "Search",
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ViewId::SellOrderDetail | ViewId::BuyOrderDetail | ViewId::OrdersOrderDetail => {
                ViewKind::Detail
            }
            ViewId::MineralDetail | ViewId::MineralForm | ViewId::SellSubmissionDetail => {
                ViewKind::Parameterized
            }
            ViewId::FinanceSendQr
            | ViewId::FinanceCallBuyer
            | ViewId::FinanceReserveEscrow
            | ViewId::FinanceTesting
            | ViewId::FinanceLcIssued
            | ViewId::FinanceRelease => ViewKind::Flow,
            _ => ViewKind::Simple,
        }
    }

    pub fn is_flow_step(&self) -> bool {
        self.kind() == ViewKind::Flow
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ViewId::all()
            .iter()
            .copied()
            .find(|view| view.as_str() == tag)
            .ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_are_unique() {
        let tags: HashSet<&str> = ViewId::all().iter().map(|v| v.as_str()).collect();
        assert_eq!(tags.len(), ViewId::all().len());
    }

    #[test]
    fn test_parse_matches_as_str() {
        for view in ViewId::all() {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), *view);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "dashbord".parse::<ViewId>().unwrap_err();
        assert_eq!(err, ParseError::UnknownView("dashbord".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_tags() {
        let json = serde_json::to_string(&ViewId::FinanceReserveEscrow).unwrap();
        assert_eq!(json, "\"finance-reserve-escrow\"");
        let back: ViewId = serde_json::from_str("\"audit-log\"").unwrap();
        assert_eq!(back, ViewId::AuditLog);
    }

    #[test]
    fn test_exactly_six_flow_views() {
        let flow = ViewId::all().iter().filter(|v| v.is_flow_step()).count();
        assert_eq!(flow, 6);
        assert!(ViewId::all()
            .iter()
            .filter(|v| v.is_flow_step())
            .all(|v| v.as_str().starts_with("finance-")));
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
    }
}
