//! Application state: the navigation session plus host-side UI state.
//!
//! Screens never touch the session directly. Key actions are turned into
//! [`Intent`]s for the resolved screen, and navigation intents go through
//! [`ConsoleSession::apply`].

use crate::config::ConsoleConfig;
use crate::keys::Action;
use crate::menu;
use crate::notifications::{Notification, NotificationLevel};
use crate::store::{MockStore, OrderRecord, StoreAction};
use crate::theme::SynthBruteTheme;
use mineral_nav::{
    AdminUser, AuthView, ConsoleSession, NavRequest, OrderType, OrdersSheetTab, Screen, ViewId,
};
use tracing::{debug, info};

/// What one row of a list screen points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Order(OrderType),
    User,
    Mineral,
    Transaction,
    Submission,
    Activity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub kind: RowKind,
}

impl Row {
    fn new(id: impl Into<String>, kind: RowKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// A single effect produced by a screen for an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(NavRequest),
    Store(StoreAction),
    Notify(NotificationLevel, String),
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

pub struct App {
    pub config: ConsoleConfig,
    pub theme: SynthBruteTheme,
    pub session: ConsoleSession,
    pub store: MockStore,
    /// Highlighted row on the current list screen.
    pub cursor: usize,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: ConsoleConfig) -> Self {
        Self::with_store(config, MockStore::seeded())
    }

    pub fn with_store(config: ConsoleConfig, store: MockStore) -> Self {
        Self {
            config,
            theme: SynthBruteTheme::synthbrute(),
            session: ConsoleSession::new(),
            store,
            cursor: 0,
            notifications: Vec::new(),
            modal: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.resolve().screen
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// JSON snapshot of the navigation session.
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.session)
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    /// Handle one key action. Returns `true` when the console should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        if action == Action::Quit {
            return true;
        }
        if self.modal.take().is_some() {
            return false;
        }
        match action {
            Action::OpenHelp => self.modal = Some(help_modal()),
            _ if !self.session.is_authenticated() => self.handle_gate(action),
            Action::Logout => self.logout(),
            Action::NextView => {
                self.navigate(NavRequest::view_change(menu::next(self.session.view())))
            }
            Action::PrevView => {
                self.navigate(NavRequest::view_change(menu::previous(self.session.view())))
            }
            Action::SwitchView(index) => {
                if let Some(view) = menu::from_index(index) {
                    self.navigate(NavRequest::view_change(view));
                }
            }
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
            other => {
                let screen = self.screen();
                for intent in self.intents(&screen, other) {
                    self.run(intent);
                }
            }
        }
        false
    }

    pub fn run(&mut self, intent: Intent) {
        match intent {
            Intent::Navigate(request) => self.navigate(request),
            Intent::Store(action) => self.store.dispatch(action),
            Intent::Notify(level, message) => self.notify(level, message),
        }
    }

    pub fn navigate(&mut self, request: NavRequest) {
        debug!(?request, "screen request");
        self.session.apply(request);
        self.after_transition();
    }

    fn after_transition(&mut self) {
        let resolution = self.session.resolve();
        self.cursor = self.cursor_for(&resolution.screen);
        if let Some(fallback) = resolution.fallback {
            self.notify(NotificationLevel::Warning, fallback.to_string());
        }
    }

    fn handle_gate(&mut self, action: Action) {
        match (self.session.auth_view(), action) {
            (AuthView::Login, Action::Confirm) => self.sign_in(),
            (AuthView::Login, Action::ForgotPassword) => {
                self.session.show_forgot_password();
            }
            (AuthView::Login, Action::RequestAccess) => {
                self.session.show_request_access();
            }
            (AuthView::ForgotPassword, Action::Confirm) => {
                let message = format!("Reset link sent to {}", self.config.admin.email);
                self.notify(NotificationLevel::Info, message);
                self.session.back_to_login();
            }
            (AuthView::RequestAccess, Action::Confirm) => {
                self.notify(NotificationLevel::Info, "Access request submitted");
                self.session.back_to_login();
            }
            (_, Action::Back) => {
                self.session.back_to_login();
            }
            _ => {}
        }
    }

    pub fn sign_in(&mut self) {
        let admin = &self.config.admin;
        let user = AdminUser::new(admin.name.clone(), admin.email.clone(), admin.role.clone());
        self.session.login(user);
        if let Some(view) = self.config.start_view {
            self.session.navigate_to(view, None);
        }
        self.store.dispatch(StoreAction::RecordActivity {
            actor: self.config.admin.email.clone(),
            message: "signed in".to_string(),
        });
        self.after_transition();
        info!(view = %self.session.view(), "console ready");
    }

    pub fn logout(&mut self) {
        self.store.dispatch(StoreAction::RecordActivity {
            actor: self.config.admin.email.clone(),
            message: "signed out".to_string(),
        });
        self.session.logout();
        self.cursor = 0;
        self.notify(NotificationLevel::Info, "Signed out");
    }

    // ========================================================================
    // SCREEN INTENTS
    // ========================================================================

    /// Effects the resolved screen produces for `action`.
    pub fn intents(&self, screen: &Screen, action: Action) -> Vec<Intent> {
        let row = self.selected_row(screen);
        let nav = |request: NavRequest| vec![Intent::Navigate(request)];
        match (screen, action) {
            (Screen::Dashboard, Action::Confirm) => match row {
                Some(Row {
                    id,
                    kind: RowKind::Order(order_type),
                }) => nav(NavRequest::open_order(id, order_type)),
                Some(Row {
                    id,
                    kind: RowKind::Submission,
                }) => nav(NavRequest::OpenSubmission { submission_id: id }),
                _ => Vec::new(),
            },

            (Screen::Users { .. } | Screen::Enquiries { .. }, Action::Confirm) => row
                .map(|row| nav(NavRequest::open_user(row.id)))
                .unwrap_or_default(),
            (Screen::Users { .. }, Action::OpenEnquiries) => row
                .map(|row| {
                    nav(NavRequest::NavigateToEnquiries {
                        user_id: Some(row.id),
                    })
                })
                .unwrap_or_default(),
            (Screen::Users { .. }, Action::FlagItem) => row
                .map(|row| {
                    vec![
                        Intent::Store(StoreAction::FlagUser {
                            user_id: row.id.clone(),
                        }),
                        self.audit(format!("flagged {}", row.id)),
                        Intent::Notify(NotificationLevel::Warning, format!("{} flagged", row.id)),
                    ]
                })
                .unwrap_or_default(),
            (Screen::Users { .. }, Action::VerifyItem) => row
                .map(|row| {
                    vec![
                        Intent::Store(StoreAction::VerifyUser {
                            user_id: row.id.clone(),
                        }),
                        self.audit(format!("verified {}", row.id)),
                        Intent::Notify(NotificationLevel::Success, format!("{} verified", row.id)),
                    ]
                })
                .unwrap_or_default(),
            (Screen::Enquiries { user_id: Some(_) }, Action::Back) => {
                nav(NavRequest::NavigateToEnquiries { user_id: None })
            }

            (Screen::Minerals, Action::Confirm) => row
                .map(|row| nav(NavRequest::OpenMineral { mineral_id: row.id }))
                .unwrap_or_default(),
            (Screen::Minerals, Action::EditItem) => row
                .map(|row| nav(NavRequest::EditMineral { mineral_id: row.id }))
                .unwrap_or_default(),
            (Screen::MineralDetail { mineral_id }, Action::EditItem) => {
                nav(NavRequest::EditMineral {
                    mineral_id: mineral_id.clone(),
                })
            }
            (Screen::MineralDetail { .. }, Action::Back) => {
                nav(NavRequest::view_change(ViewId::Minerals))
            }
            (Screen::MineralForm { mineral_id }, Action::Confirm) => vec![
                self.audit(format!("updated {}", mineral_id)),
                Intent::Notify(NotificationLevel::Success, format!("{} saved", mineral_id)),
                Intent::Navigate(NavRequest::OpenMineral {
                    mineral_id: mineral_id.clone(),
                }),
            ],
            (Screen::MineralForm { mineral_id }, Action::Back) => nav(NavRequest::OpenMineral {
                mineral_id: mineral_id.clone(),
            }),

            (Screen::OrderList { .. }, Action::Confirm) => match row {
                Some(Row {
                    id,
                    kind: RowKind::Order(order_type),
                }) => nav(NavRequest::OpenOrderInSheet {
                    order_id: id,
                    order_type,
                }),
                _ => Vec::new(),
            },
            (Screen::OrderList { sheet_tab, .. }, Action::NextStep) => {
                nav(NavRequest::OpenOrdersSheet {
                    tab: cycle_tab(*sheet_tab, 1),
                })
            }
            (Screen::OrderList { sheet_tab, .. }, Action::PrevStep) => {
                nav(NavRequest::OpenOrdersSheet {
                    tab: cycle_tab(*sheet_tab, OrdersSheetTab::all().len() - 1),
                })
            }

            (
                Screen::OrderSheetDetail { .. }
                | Screen::SellOrderDetail { .. }
                | Screen::BuyOrderDetail { .. },
                Action::Back,
            ) => nav(NavRequest::CloseOrderDetail),

            (
                Screen::OrderList { .. }
                | Screen::OrderSheetDetail { .. }
                | Screen::SellOrderDetail { .. }
                | Screen::BuyOrderDetail { .. },
                Action::OpenFlow | Action::OpenLogistics | Action::OpenDisputes,
            ) => match self.focused_order(screen, row.as_ref()) {
                Some(order) => self.order_intents(order, action),
                None => Vec::new(),
            },

            (Screen::Finance { .. }, Action::Confirm) => row
                .map(|row| nav(NavRequest::open_transaction(row.id)))
                .unwrap_or_default(),
            (Screen::Finance { .. }, Action::OpenFlow) => row
                .and_then(|row| self.store.transaction(&row.id))
                .map(|txn| nav(NavRequest::open_financial_flow(txn.id.clone(), txn.step)))
                .unwrap_or_default(),
            (
                Screen::FinancialFlow {
                    step,
                    transaction_id,
                },
                Action::NextStep,
            ) => match step.next() {
                Some(next) => {
                    let mut intents = Vec::new();
                    let reached = self.store.transaction(transaction_id).map(|t| t.step);
                    if reached.map_or(true, |r| r.position() < next.position()) {
                        intents.push(Intent::Store(StoreAction::SetTransactionStep {
                            transaction_id: transaction_id.clone(),
                            step: next,
                        }));
                        intents.push(self.audit(format!("{} moved to {}", transaction_id, next.label())));
                    }
                    intents.push(Intent::Navigate(NavRequest::AdvanceFinancialFlow));
                    intents
                }
                None => vec![Intent::Notify(
                    NotificationLevel::Info,
                    "Already at the last step".to_string(),
                )],
            },
            (Screen::FinancialFlow { .. }, Action::PrevStep) => {
                nav(NavRequest::RetreatFinancialFlow)
            }
            (Screen::FinancialFlow { transaction_id, .. }, Action::Back) => {
                nav(NavRequest::open_transaction(transaction_id.clone()))
            }
            (Screen::NoTransactionSelected { .. }, Action::Confirm | Action::Back) => {
                nav(NavRequest::view_change(ViewId::Finance))
            }

            (Screen::Logistics { .. }, Action::Confirm) => row
                .map(|row| {
                    nav(NavRequest::NavigateToLogistics {
                        order_id: Some(row.id),
                    })
                })
                .unwrap_or_default(),
            (Screen::Disputes { .. }, Action::Confirm) => row
                .map(|row| {
                    nav(NavRequest::NavigateToDisputes {
                        order_id: Some(row.id),
                    })
                })
                .unwrap_or_default(),
            (Screen::Logistics { .. } | Screen::Disputes { .. }, Action::OpenInSheet) => {
                match row {
                    Some(Row {
                        id,
                        kind: RowKind::Order(order_type),
                    }) => nav(NavRequest::open_order(id, order_type)),
                    _ => Vec::new(),
                }
            }

            (Screen::Dashboard, Action::Back) => Vec::new(),
            (_, Action::Back) => nav(NavRequest::view_change(ViewId::Dashboard)),
            _ => Vec::new(),
        }
    }

    fn order_intents(&self, order: &OrderRecord, action: Action) -> Vec<Intent> {
        let request = match action {
            Action::OpenLogistics => NavRequest::NavigateToLogistics {
                order_id: Some(order.id.clone()),
            },
            Action::OpenDisputes => NavRequest::NavigateToDisputes {
                order_id: Some(order.id.clone()),
            },
            _ => {
                let txn = order
                    .transaction_id
                    .as_deref()
                    .and_then(|id| self.store.transaction(id));
                match txn {
                    Some(txn) => NavRequest::open_financial_flow(txn.id.clone(), txn.step),
                    None => {
                        return vec![Intent::Notify(
                            NotificationLevel::Info,
                            format!("{} has no transaction yet", order.id),
                        )]
                    }
                }
            }
        };
        vec![Intent::Navigate(request)]
    }

    /// The order a screen is about: the open detail, or the highlighted row.
    fn focused_order(&self, screen: &Screen, row: Option<&Row>) -> Option<&OrderRecord> {
        let id = match screen {
            Screen::OrderSheetDetail { order } => order.order_id.as_str(),
            Screen::SellOrderDetail { order_id } | Screen::BuyOrderDetail { order_id } => {
                order_id.as_str()
            }
            _ => row.map(|row| row.id.as_str())?,
        };
        self.store.order(id)
    }

    fn audit(&self, message: String) -> Intent {
        Intent::Store(StoreAction::RecordActivity {
            actor: self
                .session
                .user()
                .map(|user| user.email.clone())
                .unwrap_or_default(),
            message,
        })
    }

    // ========================================================================
    // LIST ROWS
    // ========================================================================

    /// Rows listed by a screen, in display order.
    pub fn rows(&self, screen: &Screen) -> Vec<Row> {
        match screen {
            Screen::Dashboard => {
                let mut rows = self.order_rows(|_| true);
                rows.extend(
                    self.store
                        .submissions
                        .iter()
                        .map(|s| Row::new(s.id.clone(), RowKind::Submission)),
                );
                rows
            }
            Screen::Users { .. } => self
                .store
                .users
                .iter()
                .map(|u| Row::new(u.id.clone(), RowKind::User))
                .collect(),
            Screen::Enquiries { user_id } => self
                .store
                .users
                .iter()
                .filter(|u| user_id.as_ref().map_or(true, |id| *id == u.id))
                .map(|u| Row::new(u.id.clone(), RowKind::User))
                .collect(),
            Screen::Minerals => self
                .store
                .minerals
                .iter()
                .map(|m| Row::new(m.id.clone(), RowKind::Mineral))
                .collect(),
            Screen::OrderList { sheet_tab, .. } => match sheet_tab {
                Some(OrdersSheetTab::Buy) => self.side_rows(OrderType::Buy),
                Some(OrdersSheetTab::Sell) => self.side_rows(OrderType::Sell),
                Some(OrdersSheetTab::Settlements) => self.order_rows(|o| o.transaction_id.is_some()),
                None => self.order_rows(|_| true),
            },
            Screen::Logistics { .. } | Screen::Disputes { .. } => self.order_rows(|_| true),
            Screen::Finance { .. } => self
                .store
                .transactions
                .iter()
                .map(|t| Row::new(t.id.clone(), RowKind::Transaction))
                .collect(),
            Screen::AuditLog => (0..self.store.activity.len())
                .rev()
                .map(|i| Row::new(i.to_string(), RowKind::Activity))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn order_rows(&self, filter: impl Fn(&OrderRecord) -> bool) -> Vec<Row> {
        self.store
            .orders
            .iter()
            .filter(|o| filter(o))
            .map(|o| Row::new(o.id.clone(), RowKind::Order(o.order_type)))
            .collect()
    }

    fn side_rows(&self, order_type: OrderType) -> Vec<Row> {
        self.store
            .orders_of(order_type)
            .map(|o| Row::new(o.id.clone(), RowKind::Order(order_type)))
            .collect()
    }

    pub fn selected_row(&self, screen: &Screen) -> Option<Row> {
        self.rows(screen).into_iter().nth(self.cursor)
    }

    /// Row matching the screen's own selection, so the highlight follows it.
    fn cursor_for(&self, screen: &Screen) -> usize {
        let selected = match screen {
            Screen::Users { selected_user_id } => selected_user_id.as_deref(),
            Screen::Enquiries { user_id } => user_id.as_deref(),
            Screen::OrderList {
                selected_order_id, ..
            } => selected_order_id.as_deref(),
            Screen::Finance { transaction_id } => transaction_id.as_deref(),
            Screen::Logistics { order_id } | Screen::Disputes { order_id } => order_id.as_deref(),
            _ => None,
        };
        selected
            .and_then(|id| self.rows(screen).iter().position(|row| row.id == id))
            .unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let len = self.rows(&self.screen()).len();
        self.cursor = if len == 0 { 0 } else { (self.cursor + 1) % len };
    }

    pub fn select_previous(&mut self) {
        let len = self.rows(&self.screen()).len();
        self.cursor = match (len, self.cursor) {
            (0, _) => 0,
            (len, 0) => len - 1,
            (len, cursor) => cursor.min(len) - 1,
        };
    }
}

fn cycle_tab(current: Option<OrdersSheetTab>, step: usize) -> OrdersSheetTab {
    let tabs = OrdersSheetTab::all();
    let index = current
        .and_then(|tab| tabs.iter().position(|t| *t == tab))
        .map_or(0, |i| (i + step) % tabs.len());
    tabs[index]
}

fn help_modal() -> Modal {
    Modal {
        title: "Keybindings".to_string(),
        message: [
            "Tab/Shift-Tab or 0-9 switch section, j/k move, Enter open, Esc back.",
            "t financial flow, l logistics, d disputes, o open order, n enquiries.",
            "[ / ] step the flow or switch order tabs, e edit, x flag user, v verify user.",
            "Ctrl-L sign out, q quit.",
        ]
        .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_tab_wraps() {
        assert_eq!(cycle_tab(None, 1), OrdersSheetTab::Buy);
        assert_eq!(
            cycle_tab(Some(OrdersSheetTab::Settlements), 1),
            OrdersSheetTab::Buy
        );
        assert_eq!(cycle_tab(Some(OrdersSheetTab::Buy), 2), OrdersSheetTab::Settlements);
    }
}
