//! Mineral Test Utilities
//!
//! Shared test infrastructure for the console workspace:
//! - Proptest generators for navigation types and request sequences
//! - Fixtures for signed-in sessions and admin identities
//! - Assertions over resolved screens

pub use mineral_nav::{
    AdminUser, AuthView, ConsoleSession, Fallback, FinancialFlowStep, NavRequest, OrderDetailRef,
    OrderType, OrdersSheetTab, ParamField, Resolution, Screen, ViewId, ViewKind, ViewParams,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for navigation types.

    use super::*;
    use proptest::prelude::*;

    // === Identifier Generators ===

    /// Order ids in the marketplace's `B-ORD-`/`S-ORD-` shape.
    pub fn arb_order_id() -> impl Strategy<Value = String> {
        ("[BS]", 1000u32..9999).prop_map(|(side, n)| format!("{}-ORD-{}", side, n))
    }

    pub fn arb_transaction_id() -> impl Strategy<Value = String> {
        (1u32..999).prop_map(|n| format!("TXN-{:03}", n))
    }

    pub fn arb_user_id() -> impl Strategy<Value = String> {
        (1u32..500).prop_map(|n| format!("USR-{}", n))
    }

    pub fn arb_mineral_id() -> impl Strategy<Value = String> {
        (1u32..60).prop_map(|n| format!("MIN-{}", n))
    }

    pub fn arb_submission_id() -> impl Strategy<Value = String> {
        (1u32..200).prop_map(|n| format!("SUB-{}", n))
    }

    // === Enum Generators ===

    pub fn arb_view_id() -> impl Strategy<Value = ViewId> {
        prop::sample::select(ViewId::all().to_vec())
    }

    pub fn arb_simple_view_id() -> impl Strategy<Value = ViewId> {
        let simple: Vec<ViewId> = ViewId::all()
            .iter()
            .copied()
            .filter(|view| view.kind() == ViewKind::Simple)
            .collect();
        prop::sample::select(simple)
    }

    pub fn arb_order_type() -> impl Strategy<Value = OrderType> {
        prop_oneof![Just(OrderType::Buy), Just(OrderType::Sell)]
    }

    pub fn arb_flow_step() -> impl Strategy<Value = FinancialFlowStep> {
        prop::sample::select(FinancialFlowStep::all().to_vec())
    }

    pub fn arb_sheet_tab() -> impl Strategy<Value = OrdersSheetTab> {
        prop::sample::select(OrdersSheetTab::all().to_vec())
    }

    pub fn arb_auth_view() -> impl Strategy<Value = AuthView> {
        prop_oneof![
            Just(AuthView::Login),
            Just(AuthView::ForgotPassword),
            Just(AuthView::RequestAccess),
        ]
    }

    // === Composite Generators ===

    /// Params with any subset of fields set.
    pub fn arb_view_params() -> impl Strategy<Value = ViewParams> {
        (
            proptest::option::of(arb_user_id()),
            proptest::option::of(arb_transaction_id()),
            proptest::option::of(arb_order_id()),
            proptest::option::of(arb_mineral_id()),
            proptest::option::of(arb_submission_id()),
            proptest::option::of(arb_transaction_id()),
            proptest::option::of(arb_flow_step()),
            proptest::option::of(arb_sheet_tab()),
        )
            .prop_map(
                |(user, txn, order, mineral, submission, fin_txn, step, tab)| ViewParams {
                    selected_user_id: user,
                    selected_transaction_id: txn,
                    selected_order_id: order,
                    selected_mineral_id: mineral,
                    selected_submission_id: submission,
                    selected_financial_transaction_id: fin_txn,
                    selected_financial_flow_step: step,
                    orders_sheet_tab: tab,
                },
            )
    }

    /// Requests that only carry a view or ids.
    pub fn arb_plain_request() -> impl Strategy<Value = NavRequest> {
        prop_oneof![
            arb_view_id().prop_map(NavRequest::view_change),
            arb_user_id().prop_map(NavRequest::open_user),
            arb_transaction_id().prop_map(NavRequest::open_transaction),
            proptest::option::of(arb_user_id())
                .prop_map(|user_id| NavRequest::NavigateToEnquiries { user_id }),
            proptest::option::of(arb_order_id())
                .prop_map(|order_id| NavRequest::NavigateToLogistics { order_id }),
            proptest::option::of(arb_order_id())
                .prop_map(|order_id| NavRequest::NavigateToDisputes { order_id }),
            arb_mineral_id().prop_map(|mineral_id| NavRequest::OpenMineral { mineral_id }),
            arb_mineral_id().prop_map(|mineral_id| NavRequest::EditMineral { mineral_id }),
            arb_submission_id()
                .prop_map(|submission_id| NavRequest::OpenSubmission { submission_id }),
            arb_sheet_tab().prop_map(|tab| NavRequest::OpenOrdersSheet { tab }),
        ]
    }

    /// Requests that open or close order details or walk the financial flow.
    pub fn arb_stateful_request() -> impl Strategy<Value = NavRequest> {
        prop_oneof![
            (arb_order_id(), arb_order_type())
                .prop_map(|(id, kind)| NavRequest::open_order(id, kind)),
            (arb_order_id(), arb_order_type()).prop_map(|(order_id, order_type)| {
                NavRequest::OpenOrderInSheet {
                    order_id,
                    order_type,
                }
            }),
            Just(NavRequest::CloseOrderDetail),
            (arb_transaction_id(), arb_flow_step())
                .prop_map(|(txn, step)| NavRequest::open_financial_flow(txn, step)),
            Just(NavRequest::AdvanceFinancialFlow),
            Just(NavRequest::RetreatFinancialFlow),
        ]
    }

    /// Any request a screen may emit.
    pub fn arb_nav_request() -> impl Strategy<Value = NavRequest> {
        prop_oneof![arb_plain_request(), arb_stateful_request()]
    }

    pub fn arb_nav_requests(max: usize) -> impl Strategy<Value = Vec<NavRequest>> {
        prop::collection::vec(arb_nav_request(), 0..max)
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built sessions and identities.

    use super::*;

    pub fn admin_user() -> AdminUser {
        AdminUser::new("Amara Okafor", "amara@minex.test", "super-admin")
    }

    /// A fresh session already past the sign-in gate.
    pub fn signed_in_session() -> ConsoleSession {
        let mut session = ConsoleSession::new();
        session.login(admin_user());
        session
    }

    /// A signed-in session sitting on `view` with `params`.
    pub fn session_at(view: ViewId, params: ViewParams) -> ConsoleSession {
        let mut session = signed_in_session();
        session.navigate_to(view, Some(params));
        session
    }

    /// Every screen an order detail can be opened from, with the params that
    /// screen typically carries.
    pub fn order_detail_origins() -> Vec<(ViewId, ViewParams)> {
        vec![
            (ViewId::Dashboard, ViewParams::new()),
            (
                ViewId::Orders,
                ViewParams::new().with_sheet_tab(OrdersSheetTab::Buy),
            ),
            (ViewId::Users, ViewParams::new().with_user("USR-12")),
            (ViewId::Logistics, ViewParams::new().with_order("B-ORD-5489")),
            (ViewId::Disputes, ViewParams::new().with_order("S-ORD-2210")),
            (ViewId::Finance, ViewParams::new().with_transaction("TXN-001")),
        ]
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions over resolved screens.

    use super::*;

    /// Assert the session renders `component` without any fallback.
    #[track_caller]
    pub fn assert_renders(session: &ConsoleSession, component: &str) {
        let resolution = session.resolve();
        assert_eq!(
            resolution.screen.component(),
            component,
            "unexpected screen for view {}",
            session.view()
        );
        assert!(
            resolution.fallback.is_none(),
            "expected direct render, got fallback {:?}",
            resolution.fallback
        );
    }

    /// Assert the session falls back to `component` for `reason`.
    #[track_caller]
    pub fn assert_falls_back(session: &ConsoleSession, component: &str, reason: &Fallback) {
        let resolution = session.resolve();
        assert_eq!(resolution.screen.component(), component);
        assert_eq!(resolution.fallback.as_ref(), Some(reason));
    }

    /// Assert a detail screen never renders without a ref of the right side.
    #[track_caller]
    pub fn assert_detail_backed(session: &ConsoleSession) {
        let resolution = session.resolve();
        match &resolution.screen {
            Screen::SellOrderDetail { order_id } => {
                let order = session.order_detail().expect("sell detail without ref");
                assert_eq!(order.order_type, OrderType::Sell);
                assert_eq!(&order.order_id, order_id);
            }
            Screen::BuyOrderDetail { order_id } => {
                let order = session.order_detail().expect("buy detail without ref");
                assert_eq!(order.order_type, OrderType::Buy);
                assert_eq!(&order.order_id, order_id);
            }
            Screen::OrderSheetDetail { order } => {
                assert_eq!(session.order_detail(), Some(order));
            }
            _ => {}
        }
    }

    /// Pretty JSON of a session, for failure messages.
    pub fn describe(session: &ConsoleSession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|e| e.to_string())
    }
}
