//! Navigation requests emitted by screens.
//!
//! Screens never mutate navigation state. They hand one of these to the
//! session owner, which applies it with [`ConsoleSession::apply`].
//!
//! [`ConsoleSession::apply`]: crate::session::ConsoleSession::apply

use crate::flow::FinancialFlowStep;
use crate::order::OrderType;
use crate::params::OrdersSheetTab;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavRequest {
    ViewChange { view: ViewId },
    OpenOrder { order_id: String, order_type: OrderType },
    OpenOrderInSheet { order_id: String, order_type: OrderType },
    CloseOrderDetail,
    OpenUser { user_id: String },
    OpenTransaction { transaction_id: String },
    NavigateToEnquiries { user_id: Option<String> },
    NavigateToLogistics { order_id: Option<String> },
    NavigateToDisputes { order_id: Option<String> },
    OpenFinancialFlow { transaction_id: String, step: FinancialFlowStep },
    AdvanceFinancialFlow,
    RetreatFinancialFlow,
    OpenMineral { mineral_id: String },
    EditMineral { mineral_id: String },
    OpenSubmission { submission_id: String },
    OpenOrdersSheet { tab: OrdersSheetTab },
}

impl NavRequest {
    pub fn view_change(view: ViewId) -> Self {
        NavRequest::ViewChange { view }
    }

    pub fn open_order(order_id: impl Into<String>, order_type: OrderType) -> Self {
        NavRequest::OpenOrder {
            order_id: order_id.into(),
            order_type,
        }
    }

    pub fn open_user(user_id: impl Into<String>) -> Self {
        NavRequest::OpenUser {
            user_id: user_id.into(),
        }
    }

    pub fn open_transaction(transaction_id: impl Into<String>) -> Self {
        NavRequest::OpenTransaction {
            transaction_id: transaction_id.into(),
        }
    }

    pub fn open_financial_flow(transaction_id: impl Into<String>, step: FinancialFlowStep) -> Self {
        NavRequest::OpenFinancialFlow {
            transaction_id: transaction_id.into(),
            step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let json = serde_json::to_value(NavRequest::open_order("S-1", OrderType::Sell)).unwrap();
        assert_eq!(json["kind"], "open_order");
        assert_eq!(json["order_type"], "sell");
    }
}
