//! Root navigation state and its transitions.
//!
//! [`ConsoleSession`] is the single owner of `(view, params, order_detail,
//! auth)`. Every transition takes `&mut self` and completes before it
//! returns, so readers always observe a consistent triple.

use crate::auth::{AdminUser, AuthGate, AuthView};
use crate::flow::{view_to_step, FinancialFlowStep};
use crate::order::{DetailOrigin, OrderDetailRef, OrderType};
use crate::params::ViewParams;
use crate::request::NavRequest;
use crate::resolve::{resolve, Resolution};
use crate::view::{ViewId, ViewKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSession {
    view: ViewId,
    params: ViewParams,
    order_detail: Option<OrderDetailRef>,
    detail_origin: Option<DetailOrigin>,
    auth: AuthGate,
}

impl ConsoleSession {
    /// Dashboard, empty params, no open order, signed out on the login flow.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn order_detail(&self) -> Option<&OrderDetailRef> {
        self.order_detail.as_ref()
    }

    pub fn detail_origin(&self) -> Option<&DetailOrigin> {
        self.detail_origin.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn auth_view(&self) -> AuthView {
        self.auth.auth_view()
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.auth.user()
    }

    /// Which screen the current state renders.
    pub fn resolve(&self) -> Resolution {
        resolve(self)
    }

    // ========================================================================
    // DISPATCHER
    // ========================================================================

    /// Set the active view and replace the params wholesale.
    ///
    /// `None` means empty params, never "keep the previous ones".
    pub fn navigate_to(&mut self, view: ViewId, params: Option<ViewParams>) {
        let params = params.unwrap_or_default();
        let stray = params.stray_fields(view);
        if !stray.is_empty() {
            debug!(view = %view, ?stray, "params carry fields the view does not read");
        }
        debug!(from = %self.view, to = %view, "navigate");
        self.view = view;
        self.params = params;
        self.report_fallback();
    }

    /// Navigate by raw tag. Unknown tags land on the dashboard.
    pub fn navigate_to_tag(&mut self, tag: &str, params: Option<ViewParams>) {
        match tag.parse::<ViewId>() {
            Ok(view) => self.navigate_to(view, params),
            Err(err) => {
                warn!(%err, "falling back to dashboard");
                self.navigate_to(ViewId::Dashboard, None);
            }
        }
    }

    // ========================================================================
    // ORDER DETAIL
    // ========================================================================

    /// Open an order in the detail screen for its side.
    pub fn open_order_detail(&mut self, order_id: impl Into<String>, order_type: OrderType) {
        self.open_order_in(order_type.detail_view(), OrderDetailRef::new(order_id, order_type));
    }

    /// Open an order inline in the orders sheet, whichever side it is on.
    pub fn open_order_sheet_detail(&mut self, order_id: impl Into<String>, order_type: OrderType) {
        self.open_order_in(
            ViewId::OrdersOrderDetail,
            OrderDetailRef::new(order_id, order_type),
        );
    }

    fn open_order_in(&mut self, view: ViewId, order: OrderDetailRef) {
        // Re-opening from inside a detail keeps the first origin.
        if self.view.kind() != ViewKind::Detail || self.detail_origin.is_none() {
            self.detail_origin = Some(DetailOrigin {
                view: self.view,
                params: self.params.clone(),
            });
        }
        debug!(order_id = %order.order_id, order_type = %order.order_type, to = %view, "open order detail");
        self.order_detail = Some(order);
        self.view = view;
        self.params = ViewParams::new();
    }

    /// Leave the order detail and return to where it was opened from.
    pub fn close_order_detail(&mut self) {
        self.order_detail = None;
        match self.detail_origin.take() {
            Some(origin) => self.navigate_to(origin.view, Some(origin.params)),
            None => self.navigate_to(ViewId::Orders, None),
        }
    }

    // ========================================================================
    // FINANCIAL FLOW
    // ========================================================================

    /// Enter the guided flow for a transaction at the given step.
    pub fn open_financial_flow(&mut self, transaction_id: impl Into<String>, step: FinancialFlowStep) {
        self.navigate_to(
            step.view(),
            Some(ViewParams::new().with_financial_flow(transaction_id, step)),
        );
    }

    /// Move to the next step, keeping the transaction. Returns whether it moved.
    pub fn advance_financial_flow(&mut self) -> bool {
        self.step_financial_flow(FinancialFlowStep::next)
    }

    /// Move to the previous step, keeping the transaction. Returns whether it moved.
    pub fn retreat_financial_flow(&mut self) -> bool {
        self.step_financial_flow(FinancialFlowStep::previous)
    }

    fn step_financial_flow(&mut self, walk: fn(&FinancialFlowStep) -> Option<FinancialFlowStep>) -> bool {
        let Some(current) = view_to_step(self.view) else {
            return false;
        };
        let Some(transaction_id) = self.params.selected_financial_transaction_id.clone() else {
            return false;
        };
        match walk(&current) {
            Some(step) => {
                self.open_financial_flow(transaction_id, step);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // AUTH GATE
    // ========================================================================

    pub fn login(&mut self, user: AdminUser) {
        info!(user = %user.email, "admin signed in");
        self.auth.login(user);
    }

    /// Sign out and reset to a clean dashboard for the next sign-in.
    pub fn logout(&mut self) {
        if let Some(user) = self.auth.user() {
            info!(user = %user.email, "admin signed out");
        }
        self.auth.logout();
        self.view = ViewId::Dashboard;
        self.params = ViewParams::new();
        self.order_detail = None;
        self.detail_origin = None;
    }

    pub fn show_forgot_password(&mut self) -> bool {
        self.auth.show(AuthView::ForgotPassword)
    }

    pub fn show_request_access(&mut self) -> bool {
        self.auth.show(AuthView::RequestAccess)
    }

    pub fn back_to_login(&mut self) -> bool {
        self.auth.show(AuthView::Login)
    }

    // ========================================================================
    // REQUESTS
    // ========================================================================

    /// Apply a request emitted by a screen. Ignored while signed out.
    pub fn apply(&mut self, request: NavRequest) {
        if !self.is_authenticated() {
            warn!(?request, "navigation request ignored while signed out");
            return;
        }
        match request {
            NavRequest::ViewChange { view } => self.navigate_to(view, None),
            NavRequest::OpenOrder {
                order_id,
                order_type,
            } => self.open_order_detail(order_id, order_type),
            NavRequest::OpenOrderInSheet {
                order_id,
                order_type,
            } => self.open_order_sheet_detail(order_id, order_type),
            NavRequest::CloseOrderDetail => self.close_order_detail(),
            NavRequest::OpenUser { user_id } => {
                self.navigate_to(ViewId::Users, Some(ViewParams::new().with_user(user_id)))
            }
            NavRequest::OpenTransaction { transaction_id } => self.navigate_to(
                ViewId::Finance,
                Some(ViewParams::new().with_transaction(transaction_id)),
            ),
            NavRequest::NavigateToEnquiries { user_id } => {
                let params = ViewParams {
                    selected_user_id: user_id,
                    ..ViewParams::new()
                };
                self.navigate_to(ViewId::Enquiries, Some(params));
            }
            NavRequest::NavigateToLogistics { order_id } => {
                let params = ViewParams {
                    selected_order_id: order_id,
                    ..ViewParams::new()
                };
                self.navigate_to(ViewId::Logistics, Some(params));
            }
            NavRequest::NavigateToDisputes { order_id } => {
                let params = ViewParams {
                    selected_order_id: order_id,
                    ..ViewParams::new()
                };
                self.navigate_to(ViewId::Disputes, Some(params));
            }
            NavRequest::OpenFinancialFlow {
                transaction_id,
                step,
            } => self.open_financial_flow(transaction_id, step),
            NavRequest::AdvanceFinancialFlow => {
                self.advance_financial_flow();
            }
            NavRequest::RetreatFinancialFlow => {
                self.retreat_financial_flow();
            }
            NavRequest::OpenMineral { mineral_id } => self.navigate_to(
                ViewId::MineralDetail,
                Some(ViewParams::new().with_mineral(mineral_id)),
            ),
            NavRequest::EditMineral { mineral_id } => self.navigate_to(
                ViewId::MineralForm,
                Some(ViewParams::new().with_mineral(mineral_id)),
            ),
            NavRequest::OpenSubmission { submission_id } => self.navigate_to(
                ViewId::SellSubmissionDetail,
                Some(ViewParams::new().with_submission(submission_id)),
            ),
            NavRequest::OpenOrdersSheet { tab } => {
                self.navigate_to(ViewId::Orders, Some(ViewParams::new().with_sheet_tab(tab)))
            }
        }
    }

    fn report_fallback(&self) {
        if let Some(fallback) = self.resolve().fallback {
            warn!(view = %self.view, %fallback, "view resolves to a fallback screen");
        }
    }
}
