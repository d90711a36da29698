//! Cross-screen context carried alongside a view identifier.

use crate::error::ParseError;
use crate::flow::FinancialFlowStep;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sub-tab of the orders list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrdersSheetTab {
    Buy,
    Sell,
    Settlements,
}

impl OrdersSheetTab {
    pub fn all() -> [OrdersSheetTab; 3] {
        [
            OrdersSheetTab::Buy,
            OrdersSheetTab::Sell,
            OrdersSheetTab::Settlements,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrdersSheetTab::Buy => "buy",
            OrdersSheetTab::Sell => "sell",
            OrdersSheetTab::Settlements => "settlements",
        }
    }
}

impl fmt::Display for OrdersSheetTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrdersSheetTab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "buy" => Ok(OrdersSheetTab::Buy),
            "sell" => Ok(OrdersSheetTab::Sell),
            "settlements" => Ok(OrdersSheetTab::Settlements),
            _ => Err(ParseError::UnknownSheetTab(s.to_string())),
        }
    }
}

/// Names of the individual [`ViewParams`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    SelectedUserId,
    SelectedTransactionId,
    SelectedOrderId,
    SelectedMineralId,
    SelectedSubmissionId,
    SelectedFinancialTransactionId,
    SelectedFinancialFlowStep,
    OrdersSheetTab,
}

impl ParamField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamField::SelectedUserId => "selected_user_id",
            ParamField::SelectedTransactionId => "selected_transaction_id",
            ParamField::SelectedOrderId => "selected_order_id",
            ParamField::SelectedMineralId => "selected_mineral_id",
            ParamField::SelectedSubmissionId => "selected_submission_id",
            ParamField::SelectedFinancialTransactionId => "selected_financial_transaction_id",
            ParamField::SelectedFinancialFlowStep => "selected_financial_flow_step",
            ParamField::OrdersSheetTab => "orders_sheet_tab",
        }
    }

    /// Fields a view actually reads. Anything else passed to it is ignored.
    pub fn relevant_to(view: ViewId) -> &'static [ParamField] {
        match view {
            ViewId::Users | ViewId::Enquiries => &[ParamField::SelectedUserId],
            ViewId::Orders => &[
                ParamField::SelectedOrderId,
                ParamField::OrdersSheetTab,
                ParamField::SelectedTransactionId,
            ],
            ViewId::Logistics | ViewId::Disputes => &[ParamField::SelectedOrderId],
            ViewId::Finance => &[ParamField::SelectedTransactionId],
            ViewId::MineralDetail | ViewId::MineralForm => &[ParamField::SelectedMineralId],
            ViewId::SellSubmissionDetail => &[ParamField::SelectedSubmissionId],
            ViewId::FinanceSendQr
            | ViewId::FinanceCallBuyer
            | ViewId::FinanceReserveEscrow
            | ViewId::FinanceTesting
            | ViewId::FinanceLcIssued
            | ViewId::FinanceRelease => &[
                ParamField::SelectedFinancialTransactionId,
                ParamField::SelectedFinancialFlowStep,
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional context passed with a navigation.
///
/// The dispatcher replaces the whole record on every navigation, so a field
/// set for one screen never survives into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_mineral_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_submission_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_financial_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_financial_flow_step: Option<FinancialFlowStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders_sheet_tab: Option<OrdersSheetTab>,
}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.selected_user_id = Some(user_id.into());
        self
    }

    pub fn with_transaction(mut self, transaction_id: impl Into<String>) -> Self {
        self.selected_transaction_id = Some(transaction_id.into());
        self
    }

    pub fn with_order(mut self, order_id: impl Into<String>) -> Self {
        self.selected_order_id = Some(order_id.into());
        self
    }

    pub fn with_mineral(mut self, mineral_id: impl Into<String>) -> Self {
        self.selected_mineral_id = Some(mineral_id.into());
        self
    }

    pub fn with_submission(mut self, submission_id: impl Into<String>) -> Self {
        self.selected_submission_id = Some(submission_id.into());
        self
    }

    pub fn with_financial_flow(
        mut self,
        transaction_id: impl Into<String>,
        step: FinancialFlowStep,
    ) -> Self {
        self.selected_financial_transaction_id = Some(transaction_id.into());
        self.selected_financial_flow_step = Some(step);
        self
    }

    pub fn with_sheet_tab(mut self, tab: OrdersSheetTab) -> Self {
        self.orders_sheet_tab = Some(tab);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Fields that carry a value, in declaration order.
    pub fn present_fields(&self) -> Vec<ParamField> {
        let mut fields = Vec::new();
        if self.selected_user_id.is_some() {
            fields.push(ParamField::SelectedUserId);
        }
        if self.selected_transaction_id.is_some() {
            fields.push(ParamField::SelectedTransactionId);
        }
        if self.selected_order_id.is_some() {
            fields.push(ParamField::SelectedOrderId);
        }
        if self.selected_mineral_id.is_some() {
            fields.push(ParamField::SelectedMineralId);
        }
        if self.selected_submission_id.is_some() {
            fields.push(ParamField::SelectedSubmissionId);
        }
        if self.selected_financial_transaction_id.is_some() {
            fields.push(ParamField::SelectedFinancialTransactionId);
        }
        if self.selected_financial_flow_step.is_some() {
            fields.push(ParamField::SelectedFinancialFlowStep);
        }
        if self.orders_sheet_tab.is_some() {
            fields.push(ParamField::OrdersSheetTab);
        }
        fields
    }

    /// Present fields the target view does not read.
    pub fn stray_fields(&self, view: ViewId) -> Vec<ParamField> {
        let relevant = ParamField::relevant_to(view);
        self.present_fields()
            .into_iter()
            .filter(|field| !relevant.contains(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_empty() {
        let params = ViewParams::new();
        assert!(params.is_empty());
        assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
    }

    #[test]
    fn test_builder_sets_fields() {
        let params = ViewParams::new()
            .with_order("S-ORD-1001")
            .with_sheet_tab(OrdersSheetTab::Sell);
        assert_eq!(params.selected_order_id.as_deref(), Some("S-ORD-1001"));
        assert_eq!(
            params.present_fields(),
            vec![ParamField::SelectedOrderId, ParamField::OrdersSheetTab]
        );
    }

    #[test]
    fn test_stray_fields_for_orders() {
        let params = ViewParams::new()
            .with_order("B-ORD-5489")
            .with_mineral("MIN-7");
        assert_eq!(
            params.stray_fields(ViewId::Orders),
            vec![ParamField::SelectedMineralId]
        );
        assert!(params.stray_fields(ViewId::Logistics).contains(&ParamField::SelectedMineralId));
    }

    #[test]
    fn test_flow_params_relevant_to_every_flow_view() {
        let params = ViewParams::new().with_financial_flow("TXN-001", FinancialFlowStep::Testing);
        for step in FinancialFlowStep::all() {
            assert!(params.stray_fields(step.view()).is_empty());
        }
        assert_eq!(params.stray_fields(ViewId::Dashboard).len(), 2);
    }

    #[test]
    fn test_sheet_tab_parse() {
        assert_eq!(
            "settlements".parse::<OrdersSheetTab>().unwrap(),
            OrdersSheetTab::Settlements
        );
        assert!("archive".parse::<OrdersSheetTab>().is_err());
    }

    #[test]
    fn test_params_deserialize_partial() {
        let params: ViewParams = serde_json::from_str(
            r#"{"selected_financial_transaction_id":"TXN-001","selected_financial_flow_step":"reserve-escrow"}"#,
        )
        .unwrap();
        assert_eq!(
            params.selected_financial_flow_step,
            Some(FinancialFlowStep::ReserveEscrow)
        );
        assert!(params.selected_user_id.is_none());
    }
}
