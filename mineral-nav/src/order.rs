//! Order-detail sub-state.
//!
//! The open order is tracked apart from the active view so one detail
//! screen can be reached from many origins.

use crate::error::ParseError;
use crate::params::ViewParams;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the market an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }

    /// The dedicated detail view for this side.
    pub fn detail_view(&self) -> ViewId {
        match self {
            OrderType::Buy => ViewId::BuyOrderDetail,
            OrderType::Sell => ViewId::SellOrderDetail,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(OrderType::Buy),
            "sell" => Ok(OrderType::Sell),
            _ => Err(ParseError::UnknownOrderType(s.to_string())),
        }
    }
}

/// The order currently open in a detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderDetailRef {
    pub order_id: String,
    pub order_type: OrderType,
}

impl OrderDetailRef {
    pub fn new(order_id: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            order_id: order_id.into(),
            order_type,
        }
    }

    pub fn buy(order_id: impl Into<String>) -> Self {
        Self::new(order_id, OrderType::Buy)
    }

    pub fn sell(order_id: impl Into<String>) -> Self {
        Self::new(order_id, OrderType::Sell)
    }

    /// Whether this ref can back the given detail view.
    ///
    /// `orders-order-detail` accepts either side; the dedicated views need
    /// the side they are named after.
    pub fn matches(&self, view: ViewId) -> bool {
        match view {
            ViewId::OrdersOrderDetail => true,
            ViewId::SellOrderDetail => self.order_type == OrderType::Sell,
            ViewId::BuyOrderDetail => self.order_type == OrderType::Buy,
            _ => false,
        }
    }
}

/// Where the user was when an order detail was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailOrigin {
    pub view: ViewId,
    pub params: ViewParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_view_follows_type() {
        assert_eq!(OrderType::Buy.detail_view(), ViewId::BuyOrderDetail);
        assert_eq!(OrderType::Sell.detail_view(), ViewId::SellOrderDetail);
    }

    #[test]
    fn test_ref_matches_views() {
        let sell = OrderDetailRef::sell("S-ORD-2210");
        assert!(sell.matches(ViewId::SellOrderDetail));
        assert!(sell.matches(ViewId::OrdersOrderDetail));
        assert!(!sell.matches(ViewId::BuyOrderDetail));
        assert!(!sell.matches(ViewId::Orders));
    }

    #[test]
    fn test_order_type_parse_is_case_insensitive() {
        assert_eq!("SELL".parse::<OrderType>().unwrap(), OrderType::Sell);
        assert_eq!(
            "hold".parse::<OrderType>().unwrap_err(),
            ParseError::UnknownOrderType("hold".to_string())
        );
    }

    #[test]
    fn test_ref_serializes_lowercase_type() {
        let json = serde_json::to_value(OrderDetailRef::buy("B-ORD-5489")).unwrap();
        assert_eq!(json["order_type"], "buy");
        assert_eq!(json["order_id"], "B-ORD-5489");
    }
}
