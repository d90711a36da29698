//! In-memory domain store backing the feature screens.
//!
//! Screens read [`MockStore`] snapshots and mutate it only through
//! [`MockStore::dispatch`]. The navigation core never touches it.

use chrono::{DateTime, Utc};
use mineral_nav::{FinancialFlowStep, OrderType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Verified,
    Flagged,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "pending",
            KycStatus::Verified => "verified",
            KycStatus::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub company: String,
    pub kyc: KycStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub order_type: OrderType,
    pub user_id: String,
    pub mineral_id: String,
    pub tonnes: f64,
    pub status: String,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub order_id: String,
    pub amount_usd: f64,
    pub step: FinancialFlowStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralRecord {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub price_per_tonne_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: String,
    pub seller_id: String,
    pub mineral_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub actor: String,
    pub message: String,
}

/// Mutations feature screens may request.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    RecordActivity { actor: String, message: String },
    FlagUser { user_id: String },
    VerifyUser { user_id: String },
    SetTransactionStep {
        transaction_id: String,
        step: FinancialFlowStep,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MockStore {
    pub users: Vec<UserRecord>,
    pub orders: Vec<OrderRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub minerals: Vec<MineralRecord>,
    pub submissions: Vec<SubmissionRecord>,
    pub activity: Vec<ActivityEntry>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo marketplace.
    pub fn seeded() -> Self {
        let users = vec![
            user("USR-12", "Kwame Mensah", "Ashanti Gold Traders", KycStatus::Verified),
            user("USR-27", "Lindiwe Dube", "Limpopo Chrome Co", KycStatus::Pending),
            user("USR-31", "Rafael Souza", "Minas Lithium", KycStatus::Verified),
            user("USR-44", "Chen Wei", "Pacific Metals Import", KycStatus::Flagged),
        ];
        let minerals = vec![
            mineral("MIN-1", "Gold Dore", "92%", 61_500.0),
            mineral("MIN-3", "Chrome Ore", "Cr2O3 42%", 285.0),
            mineral("MIN-7", "Spodumene", "Li2O 6%", 1_150.0),
            mineral("MIN-9", "Copper Cathode", "Grade A", 8_900.0),
        ];
        let orders = vec![
            order("B-ORD-5489", OrderType::Buy, "USR-44", "MIN-3", 2_500.0, "escrow", Some("TXN-001")),
            order("S-ORD-2210", OrderType::Sell, "USR-27", "MIN-3", 2_500.0, "testing", Some("TXN-001")),
            order("B-ORD-5502", OrderType::Buy, "USR-31", "MIN-9", 120.0, "open", None),
            order("S-ORD-2231", OrderType::Sell, "USR-12", "MIN-1", 0.8, "lc-issued", Some("TXN-014")),
            order("S-ORD-2244", OrderType::Sell, "USR-31", "MIN-7", 900.0, "draft", None),
        ];
        let transactions = vec![
            TransactionRecord {
                id: "TXN-001".to_string(),
                order_id: "B-ORD-5489".to_string(),
                amount_usd: 712_500.0,
                step: FinancialFlowStep::ReserveEscrow,
            },
            TransactionRecord {
                id: "TXN-014".to_string(),
                order_id: "S-ORD-2231".to_string(),
                amount_usd: 49_200.0,
                step: FinancialFlowStep::LcIssued,
            },
        ];
        let submissions = vec![
            SubmissionRecord {
                id: "SUB-9".to_string(),
                seller_id: "USR-27".to_string(),
                mineral_id: "MIN-3".to_string(),
                status: "under review".to_string(),
            },
            SubmissionRecord {
                id: "SUB-12".to_string(),
                seller_id: "USR-31".to_string(),
                mineral_id: "MIN-7".to_string(),
                status: "approved".to_string(),
            },
        ];
        Self {
            users,
            orders,
            transactions,
            minerals,
            submissions,
            activity: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        match action {
            StoreAction::RecordActivity { actor, message } => {
                self.activity.push(ActivityEntry {
                    at: Utc::now(),
                    actor,
                    message,
                });
            }
            StoreAction::FlagUser { user_id } => self.set_kyc(&user_id, KycStatus::Flagged),
            StoreAction::VerifyUser { user_id } => self.set_kyc(&user_id, KycStatus::Verified),
            StoreAction::SetTransactionStep {
                transaction_id,
                step,
            } => {
                if let Some(txn) = self.transactions.iter_mut().find(|t| t.id == transaction_id) {
                    txn.step = step;
                }
            }
        }
    }

    fn set_kyc(&mut self, user_id: &str, status: KycStatus) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.kyc = status;
        }
    }

    pub fn user(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn order(&self, id: &str) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&TransactionRecord> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn mineral(&self, id: &str) -> Option<&MineralRecord> {
        self.minerals.iter().find(|m| m.id == id)
    }

    pub fn submission(&self, id: &str) -> Option<&SubmissionRecord> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn orders_of(&self, order_type: OrderType) -> impl Iterator<Item = &OrderRecord> {
        self.orders.iter().filter(move |o| o.order_type == order_type)
    }
}

fn user(id: &str, name: &str, company: &str, kyc: KycStatus) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        kyc,
    }
}

fn mineral(id: &str, name: &str, grade: &str, price: f64) -> MineralRecord {
    MineralRecord {
        id: id.to_string(),
        name: name.to_string(),
        grade: grade.to_string(),
        price_per_tonne_usd: price,
    }
}

fn order(
    id: &str,
    order_type: OrderType,
    user_id: &str,
    mineral_id: &str,
    tonnes: f64,
    status: &str,
    transaction_id: Option<&str>,
) -> OrderRecord {
    OrderRecord {
        id: id.to_string(),
        order_type,
        user_id: user_id.to_string(),
        mineral_id: mineral_id.to_string(),
        tonnes,
        status: status.to_string(),
        transaction_id: transaction_id.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_references_resolve() {
        let store = MockStore::seeded();
        for order in &store.orders {
            assert!(store.user(&order.user_id).is_some(), "{}", order.id);
            assert!(store.mineral(&order.mineral_id).is_some(), "{}", order.id);
            if let Some(txn) = &order.transaction_id {
                assert!(store.transaction(txn).is_some(), "{}", order.id);
            }
        }
    }

    #[test]
    fn test_flag_user() {
        let mut store = MockStore::seeded();
        store.dispatch(StoreAction::FlagUser {
            user_id: "USR-12".to_string(),
        });
        assert_eq!(store.user("USR-12").map(|u| u.kyc), Some(KycStatus::Flagged));
    }

    #[test]
    fn test_unknown_user_is_noop() {
        let mut store = MockStore::seeded();
        let before = store.users.clone();
        store.dispatch(StoreAction::VerifyUser {
            user_id: "USR-0".to_string(),
        });
        assert_eq!(store.users, before);
    }

    #[test]
    fn test_record_activity_appends() {
        let mut store = MockStore::new();
        store.dispatch(StoreAction::RecordActivity {
            actor: "amara@minex.test".to_string(),
            message: "opened B-ORD-5489".to_string(),
        });
        assert_eq!(store.activity.len(), 1);
        assert_eq!(store.activity[0].message, "opened B-ORD-5489");
    }

    #[test]
    fn test_set_transaction_step() {
        let mut store = MockStore::seeded();
        store.dispatch(StoreAction::SetTransactionStep {
            transaction_id: "TXN-001".to_string(),
            step: FinancialFlowStep::Testing,
        });
        assert_eq!(
            store.transaction("TXN-001").map(|t| t.step),
            Some(FinancialFlowStep::Testing)
        );
    }

    #[test]
    fn test_orders_of_side() {
        let store = MockStore::seeded();
        assert!(store.orders_of(OrderType::Sell).all(|o| o.id.starts_with("S-")));
        assert_eq!(store.orders_of(OrderType::Buy).count(), 2);
    }
}
