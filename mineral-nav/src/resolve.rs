//! View resolution: which screen the current session state renders.
//!
//! Precedence is fixed:
//! 1. signed out renders the sign-in flow and nothing else is consulted;
//! 2. `sell-order-detail`/`buy-order-detail` with a ref of the same side;
//! 3. the general match, where every remaining precondition has its own
//!    fallback.
//!
//! A dedicated detail view with a missing or mismatched ref reaches the
//! general match and lands on the dashboard. That dead end is deliberate
//! behaviour to keep, and [`Fallback::OrderTypeMismatch`] marks it.

use crate::auth::AuthView;
use crate::flow::FinancialFlowStep;
use crate::order::{OrderDetailRef, OrderType};
use crate::params::{OrdersSheetTab, ParamField, ViewParams};
use crate::session::ConsoleSession;
use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A screen together with exactly the data it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Auth { view: AuthView },
    Dashboard,
    Users { selected_user_id: Option<String> },
    Minerals,
    MineralDetail { mineral_id: String },
    MineralForm { mineral_id: String },
    OrderList {
        sheet_tab: Option<OrdersSheetTab>,
        selected_order_id: Option<String>,
        selected_transaction_id: Option<String>,
    },
    OrderSheetDetail { order: OrderDetailRef },
    SellOrderDetail { order_id: String },
    BuyOrderDetail { order_id: String },
    SellSubmissionDetail { submission_id: String },
    Enquiries { user_id: Option<String> },
    Finance { transaction_id: Option<String> },
    FinancialFlow {
        step: FinancialFlowStep,
        transaction_id: String,
    },
    NoTransactionSelected { step: FinancialFlowStep },
    Logistics { order_id: Option<String> },
    Disputes { order_id: Option<String> },
    Content,
    Analytics,
    Partners,
    Insurance,
    Settings,
    AuditLog,
    CallHistory,
    Profile,
    Help,
    Notifications,
    Search,
}

impl Screen {
    /// Name of the component that renders this screen.
    pub fn component(&self) -> &'static str {
        match self {
            Screen::Auth { view } => match view {
                AuthView::Login => "Login",
                AuthView::ForgotPassword => "ForgotPassword",
                AuthView::RequestAccess => "RequestAccess",
            },
            Screen::Dashboard => "Dashboard",
            Screen::Users { .. } => "UserManagement",
            Screen::Minerals => "MineralManagement",
            Screen::MineralDetail { .. } => "MineralDetail",
            Screen::MineralForm { .. } => "MineralForm",
            Screen::OrderList { .. } => "OrderTransactionManagement",
            Screen::OrderSheetDetail { .. } => "OrderDetail",
            Screen::SellOrderDetail { .. } => "SellOrderDetail",
            Screen::BuyOrderDetail { .. } => "BuyOrderDetail",
            Screen::SellSubmissionDetail { .. } => "SellSubmissionDetail",
            Screen::Enquiries { .. } => "EnquiryManagement",
            Screen::Finance { .. } => "FinancialManagement",
            Screen::FinancialFlow { step, .. } => match step {
                FinancialFlowStep::SendQr => "SendQrStep",
                FinancialFlowStep::CallBuyer => "CallBuyerStep",
                FinancialFlowStep::ReserveEscrow => "ReserveEscrowStep",
                FinancialFlowStep::Testing => "TestingStep",
                FinancialFlowStep::LcIssued => "LcIssuedStep",
                FinancialFlowStep::Release => "ReleaseStep",
            },
            Screen::NoTransactionSelected { .. } => "NoTransactionSelected",
            Screen::Logistics { .. } => "LogisticsManagement",
            Screen::Disputes { .. } => "DisputeManagement",
            Screen::Content => "ContentManagement",
            Screen::Analytics => "Analytics",
            Screen::Partners => "PartnerManagement",
            Screen::Insurance => "InsuranceClaims",
            Screen::Settings => "Settings",
            Screen::AuditLog => "AuditLog",
            Screen::CallHistory => "CallHistory",
            Screen::Profile => "Profile",
            Screen::Help => "HelpCenter",
            Screen::Notifications => "NotificationCenter",
            Screen::Search => "GlobalSearch",
        }
    }

    /// The view identifier this screen renders for. `None` for sign-in flows.
    pub fn view(&self) -> Option<ViewId> {
        let view = match self {
            Screen::Auth { .. } => return None,
            Screen::Dashboard => ViewId::Dashboard,
            Screen::Users { .. } => ViewId::Users,
            Screen::Minerals => ViewId::Minerals,
            Screen::MineralDetail { .. } => ViewId::MineralDetail,
            Screen::MineralForm { .. } => ViewId::MineralForm,
            Screen::OrderList { .. } => ViewId::Orders,
            Screen::OrderSheetDetail { .. } => ViewId::OrdersOrderDetail,
            Screen::SellOrderDetail { .. } => ViewId::SellOrderDetail,
            Screen::BuyOrderDetail { .. } => ViewId::BuyOrderDetail,
            Screen::SellSubmissionDetail { .. } => ViewId::SellSubmissionDetail,
            Screen::Enquiries { .. } => ViewId::Enquiries,
            Screen::Finance { .. } => ViewId::Finance,
            Screen::FinancialFlow { step, .. } | Screen::NoTransactionSelected { step } => {
                step.view()
            }
            Screen::Logistics { .. } => ViewId::Logistics,
            Screen::Disputes { .. } => ViewId::Disputes,
            Screen::Content => ViewId::Content,
            Screen::Analytics => ViewId::Analytics,
            Screen::Partners => ViewId::Partners,
            Screen::Insurance => ViewId::Insurance,
            Screen::Settings => ViewId::Settings,
            Screen::AuditLog => ViewId::AuditLog,
            Screen::CallHistory => ViewId::CallHistory,
            Screen::Profile => ViewId::Profile,
            Screen::Help => ViewId::Help,
            Screen::Notifications => ViewId::Notifications,
            Screen::Search => ViewId::Search,
        };
        Some(view)
    }

    /// Breadcrumb trail shown above the screen.
    pub fn breadcrumb(&self) -> Vec<String> {
        match self {
            Screen::Auth { view } => vec![view.title().to_string()],
            Screen::FinancialFlow {
                step,
                transaction_id,
            } => vec![
                "Finance".to_string(),
                transaction_id.clone(),
                step.label().to_string(),
            ],
            Screen::NoTransactionSelected { step } => {
                vec!["Finance".to_string(), step.label().to_string()]
            }
            Screen::OrderSheetDetail {
                order: OrderDetailRef { order_id, .. },
            }
            | Screen::SellOrderDetail { order_id }
            | Screen::BuyOrderDetail { order_id } => {
                vec!["Orders".to_string(), order_id.clone()]
            }
            Screen::MineralDetail { mineral_id } => {
                vec!["Minerals".to_string(), mineral_id.clone()]
            }
            Screen::MineralForm { mineral_id } => vec![
                "Minerals".to_string(),
                mineral_id.clone(),
                "Edit".to_string(),
            ],
            Screen::SellSubmissionDetail { submission_id } => vec![
                "Minerals".to_string(),
                "Sell Submissions".to_string(),
                submission_id.clone(),
            ],
            other => other
                .view()
                .map(|view| vec![view.title().to_string()])
                .unwrap_or_default(),
        }
    }
}

/// Why the resolver rendered something other than the requested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Fallback {
    /// A detail view was requested with no open order.
    OrderDetailMissing,
    /// A dedicated detail view was requested for an order of the other side.
    OrderTypeMismatch {
        requested: OrderType,
        found: OrderType,
    },
    /// A parameterized view was requested without its field.
    MissingParam { field: ParamField },
    /// A flow step was requested with no transaction selected.
    MissingTransaction,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::OrderDetailMissing => write!(f, "no order detail open"),
            Fallback::OrderTypeMismatch { requested, found } => {
                write!(f, "requested {} detail but open order is {}", requested, found)
            }
            Fallback::MissingParam { field } => write!(f, "missing param {}", field),
            Fallback::MissingTransaction => write!(f, "no transaction selected"),
        }
    }
}

/// Resolver output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub screen: Screen,
    pub fallback: Option<Fallback>,
}

impl Resolution {
    fn direct(screen: Screen) -> Self {
        Self {
            screen,
            fallback: None,
        }
    }

    fn fallback(screen: Screen, reason: Fallback) -> Self {
        Self {
            screen,
            fallback: Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Resolve the session's current state to a screen.
pub fn resolve(session: &ConsoleSession) -> Resolution {
    if !session.is_authenticated() {
        return Resolution::direct(Screen::Auth {
            view: session.auth_view(),
        });
    }

    let view = session.view();
    let params = session.params();
    let order = session.order_detail();

    if let Some(order) = order.filter(|order| order.matches(view)) {
        let order_id = order.order_id.clone();
        match view {
            ViewId::SellOrderDetail => {
                return Resolution::direct(Screen::SellOrderDetail { order_id });
            }
            ViewId::BuyOrderDetail => {
                return Resolution::direct(Screen::BuyOrderDetail { order_id });
            }
            _ => {}
        }
    }

    match view {
        ViewId::SellOrderDetail | ViewId::BuyOrderDetail => {
            let requested = if view == ViewId::SellOrderDetail {
                OrderType::Sell
            } else {
                OrderType::Buy
            };
            let reason = match order {
                Some(order) => Fallback::OrderTypeMismatch {
                    requested,
                    found: order.order_type,
                },
                None => Fallback::OrderDetailMissing,
            };
            Resolution::fallback(Screen::Dashboard, reason)
        }
        ViewId::OrdersOrderDetail => match order {
            Some(order) => Resolution::direct(Screen::OrderSheetDetail {
                order: order.clone(),
            }),
            None => Resolution::fallback(order_list(params), Fallback::OrderDetailMissing),
        },
        ViewId::MineralDetail => require(
            params.selected_mineral_id.as_ref(),
            ParamField::SelectedMineralId,
            |mineral_id| Screen::MineralDetail { mineral_id },
        ),
        ViewId::MineralForm => require(
            params.selected_mineral_id.as_ref(),
            ParamField::SelectedMineralId,
            |mineral_id| Screen::MineralForm { mineral_id },
        ),
        ViewId::SellSubmissionDetail => require(
            params.selected_submission_id.as_ref(),
            ParamField::SelectedSubmissionId,
            |submission_id| Screen::SellSubmissionDetail { submission_id },
        ),
        ViewId::FinanceSendQr => resolve_flow(FinancialFlowStep::SendQr, params),
        ViewId::FinanceCallBuyer => resolve_flow(FinancialFlowStep::CallBuyer, params),
        ViewId::FinanceReserveEscrow => resolve_flow(FinancialFlowStep::ReserveEscrow, params),
        ViewId::FinanceTesting => resolve_flow(FinancialFlowStep::Testing, params),
        ViewId::FinanceLcIssued => resolve_flow(FinancialFlowStep::LcIssued, params),
        ViewId::FinanceRelease => resolve_flow(FinancialFlowStep::Release, params),
        ViewId::Dashboard => Resolution::direct(Screen::Dashboard),
        ViewId::Users => Resolution::direct(Screen::Users {
            selected_user_id: params.selected_user_id.clone(),
        }),
        ViewId::Minerals => Resolution::direct(Screen::Minerals),
        ViewId::Orders => Resolution::direct(order_list(params)),
        ViewId::Enquiries => Resolution::direct(Screen::Enquiries {
            user_id: params.selected_user_id.clone(),
        }),
        ViewId::Finance => Resolution::direct(Screen::Finance {
            transaction_id: params.selected_transaction_id.clone(),
        }),
        ViewId::Logistics => Resolution::direct(Screen::Logistics {
            order_id: params.selected_order_id.clone(),
        }),
        ViewId::Disputes => Resolution::direct(Screen::Disputes {
            order_id: params.selected_order_id.clone(),
        }),
        ViewId::Content => Resolution::direct(Screen::Content),
        ViewId::Analytics => Resolution::direct(Screen::Analytics),
        ViewId::Partners => Resolution::direct(Screen::Partners),
        ViewId::Insurance => Resolution::direct(Screen::Insurance),
        ViewId::Settings => Resolution::direct(Screen::Settings),
        ViewId::AuditLog => Resolution::direct(Screen::AuditLog),
        ViewId::CallHistory => Resolution::direct(Screen::CallHistory),
        ViewId::Profile => Resolution::direct(Screen::Profile),
        ViewId::Help => Resolution::direct(Screen::Help),
        ViewId::Notifications => Resolution::direct(Screen::Notifications),
        ViewId::Search => Resolution::direct(Screen::Search),
    }
}

fn order_list(params: &ViewParams) -> Screen {
    Screen::OrderList {
        sheet_tab: params.orders_sheet_tab,
        selected_order_id: params.selected_order_id.clone(),
        selected_transaction_id: params.selected_transaction_id.clone(),
    }
}

fn require(
    value: Option<&String>,
    field: ParamField,
    build: impl FnOnce(String) -> Screen,
) -> Resolution {
    match value {
        Some(value) => Resolution::direct(build(value.clone())),
        None => Resolution::fallback(Screen::Dashboard, Fallback::MissingParam { field }),
    }
}

fn resolve_flow(step: FinancialFlowStep, params: &ViewParams) -> Resolution {
    match &params.selected_financial_transaction_id {
        Some(transaction_id) => Resolution::direct(Screen::FinancialFlow {
            step,
            transaction_id: transaction_id.clone(),
        }),
        None => Resolution::fallback(
            Screen::NoTransactionSelected { step },
            Fallback::MissingTransaction,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AdminUser;

    fn signed_in() -> ConsoleSession {
        let mut session = ConsoleSession::new();
        session.login(AdminUser::new("Amara Okafor", "amara@minex.test", "super-admin"));
        session
    }

    #[test]
    fn test_signed_out_renders_gate_for_any_view() {
        let mut session = signed_in();
        session.navigate_to(ViewId::Finance, None);
        session.logout();
        session.show_request_access();
        let resolution = session.resolve();
        assert_eq!(
            resolution.screen,
            Screen::Auth {
                view: AuthView::RequestAccess
            }
        );
        assert!(resolution.screen.view().is_none());
    }

    #[test]
    fn test_matching_sell_detail() {
        let mut session = signed_in();
        session.open_order_detail("S-ORD-2210", OrderType::Sell);
        assert_eq!(
            session.resolve(),
            Resolution::direct(Screen::SellOrderDetail {
                order_id: "S-ORD-2210".to_string()
            })
        );
    }

    #[test]
    fn test_mismatched_detail_falls_to_dashboard() {
        let mut session = signed_in();
        session.open_order_detail("S-ORD-2210", OrderType::Sell);
        session.navigate_to(ViewId::BuyOrderDetail, None);
        let resolution = session.resolve();
        assert_eq!(resolution.screen, Screen::Dashboard);
        assert_eq!(
            resolution.fallback,
            Some(Fallback::OrderTypeMismatch {
                requested: OrderType::Buy,
                found: OrderType::Sell,
            })
        );
    }

    #[test]
    fn test_detail_renders_exactly_when_ref_matches() {
        for order_type in [OrderType::Buy, OrderType::Sell] {
            for view in [
                ViewId::SellOrderDetail,
                ViewId::BuyOrderDetail,
                ViewId::OrdersOrderDetail,
            ] {
                let mut session = signed_in();
                session.open_order_detail("ORD-1", order_type);
                session.navigate_to(view, None);
                let order = OrderDetailRef::new("ORD-1", order_type);
                let resolution = session.resolve();
                assert_eq!(
                    resolution.fallback.is_none(),
                    order.matches(view),
                    "{} with {}",
                    view,
                    order_type
                );
            }
        }
    }

    #[test]
    fn test_every_finance_view_renders_its_step() {
        for view in ViewId::all().iter().filter(|v| v.is_flow_step()) {
            let mut session = signed_in();
            session.navigate_to(
                *view,
                Some(ViewParams::new().with_financial_flow("TXN-001", FinancialFlowStep::SendQr)),
            );
            match session.resolve().screen {
                Screen::FinancialFlow { step, .. } => {
                    assert_eq!(Some(step), crate::flow::view_to_step(*view))
                }
                other => panic!("{} resolved to {:?}", view, other),
            }
        }
    }

    #[test]
    fn test_detail_without_ref_falls_to_dashboard() {
        let mut session = signed_in();
        session.navigate_to(ViewId::SellOrderDetail, None);
        let resolution = session.resolve();
        assert_eq!(resolution.screen, Screen::Dashboard);
        assert_eq!(resolution.fallback, Some(Fallback::OrderDetailMissing));
    }

    #[test]
    fn test_orders_detail_without_ref_renders_list() {
        let mut session = signed_in();
        session.navigate_to(
            ViewId::OrdersOrderDetail,
            Some(ViewParams::new().with_sheet_tab(OrdersSheetTab::Buy)),
        );
        let resolution = session.resolve();
        assert_eq!(resolution.screen.component(), "OrderTransactionManagement");
        assert_eq!(
            resolution.screen,
            Screen::OrderList {
                sheet_tab: Some(OrdersSheetTab::Buy),
                selected_order_id: None,
                selected_transaction_id: None,
            }
        );
    }

    #[test]
    fn test_parameterized_views_need_their_field() {
        let mut session = signed_in();
        for (view, field) in [
            (ViewId::MineralDetail, ParamField::SelectedMineralId),
            (ViewId::MineralForm, ParamField::SelectedMineralId),
            (ViewId::SellSubmissionDetail, ParamField::SelectedSubmissionId),
        ] {
            session.navigate_to(view, None);
            let resolution = session.resolve();
            assert_eq!(resolution.screen, Screen::Dashboard);
            assert_eq!(resolution.fallback, Some(Fallback::MissingParam { field }));
        }
        session.navigate_to(ViewId::MineralForm, Some(ViewParams::new().with_mineral("MIN-3")));
        assert_eq!(
            session.resolve().screen,
            Screen::MineralForm {
                mineral_id: "MIN-3".to_string()
            }
        );
    }

    #[test]
    fn test_flow_breadcrumb() {
        let mut session = signed_in();
        session.open_financial_flow("TXN-001", FinancialFlowStep::LcIssued);
        let screen = session.resolve().screen;
        assert_eq!(screen.component(), "LcIssuedStep");
        assert_eq!(screen.breadcrumb(), vec!["Finance", "TXN-001", "LC Issued"]);
    }

    #[test]
    fn test_every_view_resolves_without_panic() {
        let mut session = signed_in();
        for view in ViewId::all() {
            session.navigate_to(*view, None);
            let resolution = session.resolve();
            assert!(!resolution.screen.breadcrumb().is_empty());
        }
    }

    #[test]
    fn test_simple_views_render_themselves() {
        let mut session = signed_in();
        for view in ViewId::all()
            .iter()
            .filter(|v| v.kind() == crate::view::ViewKind::Simple)
        {
            session.navigate_to(*view, None);
            let resolution = session.resolve();
            assert!(!resolution.is_fallback(), "{}", view);
            assert_eq!(resolution.screen.view(), Some(*view));
        }
    }
}
