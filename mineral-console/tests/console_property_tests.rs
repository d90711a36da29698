use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use mineral_console::config::{AdminConfig, ConfigError, ConsoleConfig, ThemeConfig};
use mineral_console::keys::{map_key, Action};
use mineral_console::notifications::NotificationLevel;
use mineral_console::state::App;
use mineral_console::store::KycStatus;
use mineral_nav::{
    AuthView, ConsoleSession, FinancialFlowStep, OrderType, OrdersSheetTab, Screen, ViewId,
};
use mineral_test_utils::assertions::assert_detail_backed;
use proptest::prelude::*;
use std::io::Write;

fn base_config() -> ConsoleConfig {
    ConsoleConfig {
        tick_rate_ms: 250,
        log_path: "tmp/mineral-console.log".into(),
        log_filter: "info,mineral_nav=debug".to_string(),
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
        admin: AdminConfig {
            name: "Amara Okafor".to_string(),
            email: "amara@minex.test".to_string(),
            role: "super-admin".to_string(),
        },
        start_view: None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn signed_in_app() -> App {
    let mut app = App::new(base_config());
    app.handle_action(Action::Confirm);
    app
}

fn press(app: &mut App, actions: &[Action]) {
    for action in actions {
        assert!(!app.handle_action(*action), "{:?} quit the console", action);
    }
}

// ========================================================================
// Config
// ========================================================================

#[test]
fn config_accepts_base() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_synthbrute_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "theme.name",
            ..
        })
    ));
}

#[test]
fn config_rejects_zero_tick_rate() {
    let mut config = base_config();
    config.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_start_view_needing_selection() {
    for view in [
        ViewId::BuyOrderDetail,
        ViewId::MineralForm,
        ViewId::FinanceReserveEscrow,
    ] {
        let mut config = base_config();
        config.start_view = Some(view);
        assert!(config.validate().is_err(), "{}", view);
    }
    let mut config = base_config();
    config.start_view = Some(ViewId::Orders);
    assert!(config.validate().is_ok());
}

#[test]
fn config_parses_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
tick_rate_ms = 200
log_path = "logs/console.log"
log_filter = "info"
start_view = "finance"

[theme]
name = "SynthBrute"

[admin]
name = "Amara Okafor"
email = "amara@minex.test"
role = "super-admin"
"#
    )
    .expect("write config");

    let config = ConsoleConfig::from_path(file.path()).expect("parse config");
    assert_eq!(config.start_view, Some(ViewId::Finance));
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_unknown_fields() {
    let toml = r#"
tick_rate_ms = 200
log_path = "console.log"
log_filter = "info"
api_base_url = "http://localhost"

[theme]
name = "synthbrute"

[admin]
name = "A"
email = "a@b.test"
role = "ops"
"#;
    assert!(matches!(
        ConsoleConfig::from_toml(toml),
        Err(ConfigError::Parse(_))
    ));
}

// ========================================================================
// Keys
// ========================================================================

#[test]
fn ctrl_c_quits_and_ctrl_l_signs_out() {
    let ctrl = |c| KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..key(KeyCode::Char(c))
    };
    assert_eq!(map_key(ctrl('c')), Some(Action::Quit));
    assert_eq!(map_key(ctrl('l')), Some(Action::Logout));
    assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::OpenLogistics));
    assert_eq!(map_key(key(KeyCode::Char('v'))), Some(Action::VerifyItem));
}

// ========================================================================
// App flows
// ========================================================================

#[test]
fn starts_on_login_gate() {
    let app = App::new(base_config());
    assert_eq!(app.screen(), Screen::Auth { view: AuthView::Login });
}

#[test]
fn gate_sub_flows_return_to_login() {
    let mut app = App::new(base_config());
    press(&mut app, &[Action::ForgotPassword]);
    assert_eq!(app.screen(), Screen::Auth { view: AuthView::ForgotPassword });
    press(&mut app, &[Action::Confirm]);
    assert_eq!(app.screen(), Screen::Auth { view: AuthView::Login });
    assert!(!app.session.is_authenticated());

    press(&mut app, &[Action::RequestAccess, Action::Back]);
    assert_eq!(app.screen(), Screen::Auth { view: AuthView::Login });
}

#[test]
fn sign_in_honours_start_view() {
    let mut config = base_config();
    config.start_view = Some(ViewId::Minerals);
    let mut app = App::new(config);
    press(&mut app, &[Action::Confirm]);
    assert_eq!(app.session.view(), ViewId::Minerals);
    assert_eq!(
        app.session.user().map(|u| u.email.as_str()),
        Some("amara@minex.test")
    );
}

#[test]
fn dashboard_opens_and_closes_buy_order() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::Confirm]);
    assert_eq!(
        app.screen(),
        Screen::BuyOrderDetail {
            order_id: "B-ORD-5489".to_string()
        }
    );
    press(&mut app, &[Action::Back]);
    assert_eq!(app.screen(), Screen::Dashboard);
    assert!(app.session.order_detail().is_none());
}

#[test]
fn order_sheet_detail_returns_to_tab() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(3), Action::NextStep]);
    assert_eq!(
        app.session.params().orders_sheet_tab,
        Some(OrdersSheetTab::Buy)
    );
    press(&mut app, &[Action::MoveDown, Action::Confirm]);
    match app.screen() {
        Screen::OrderSheetDetail { order } => {
            assert_eq!(order.order_id, "B-ORD-5502");
            assert_eq!(order.order_type, OrderType::Buy);
        }
        other => panic!("unexpected screen {:?}", other),
    }
    press(&mut app, &[Action::Back]);
    assert_eq!(app.session.view(), ViewId::Orders);
    assert_eq!(
        app.session.params().orders_sheet_tab,
        Some(OrdersSheetTab::Buy)
    );
}

#[test]
fn finance_flow_walks_and_records_progress() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(5), Action::Confirm, Action::OpenFlow]);
    assert_eq!(
        app.screen(),
        Screen::FinancialFlow {
            step: FinancialFlowStep::ReserveEscrow,
            transaction_id: "TXN-001".to_string()
        }
    );

    press(&mut app, &[Action::NextStep]);
    assert_eq!(app.session.view(), ViewId::FinanceTesting);
    assert_eq!(
        app.store.transaction("TXN-001").map(|t| t.step),
        Some(FinancialFlowStep::Testing)
    );

    press(&mut app, &[Action::PrevStep]);
    assert_eq!(app.session.view(), ViewId::FinanceReserveEscrow);
    assert_eq!(
        app.store.transaction("TXN-001").map(|t| t.step),
        Some(FinancialFlowStep::Testing)
    );

    press(&mut app, &[Action::Back]);
    assert_eq!(
        app.screen(),
        Screen::Finance {
            transaction_id: Some("TXN-001".to_string())
        }
    );
}

#[test]
fn flow_without_transaction_warns_and_offers_way_back() {
    let mut app = signed_in_app();
    app.navigate(mineral_nav::NavRequest::view_change(ViewId::FinanceRelease));
    assert_eq!(
        app.screen(),
        Screen::NoTransactionSelected {
            step: FinancialFlowStep::Release
        }
    );
    assert_eq!(
        app.notifications.last().map(|n| n.level),
        Some(NotificationLevel::Warning)
    );
    press(&mut app, &[Action::Confirm]);
    assert_eq!(app.session.view(), ViewId::Finance);
}

#[test]
fn flagging_user_updates_store_and_audit_log() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(1), Action::FlagItem]);
    assert_eq!(
        app.store.user("USR-12").map(|u| u.kyc),
        Some(KycStatus::Flagged)
    );
    assert!(app
        .store
        .activity
        .iter()
        .any(|entry| entry.message == "flagged USR-12"));
}

#[test]
fn verifying_flagged_user_restores_kyc() {
    let mut app = signed_in_app();
    press(
        &mut app,
        &[Action::SwitchView(1), Action::MoveDown, Action::FlagItem, Action::VerifyItem],
    );
    assert_eq!(
        app.store.user("USR-27").map(|u| u.kyc),
        Some(KycStatus::Verified)
    );
    assert!(app
        .store
        .activity
        .iter()
        .any(|entry| entry.message == "verified USR-27"));
    assert_eq!(
        app.notifications.last().map(|n| n.level),
        Some(NotificationLevel::Success)
    );
}

#[test]
fn sheet_tabs_list_only_their_side() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(3), Action::NextStep, Action::NextStep]);
    assert_eq!(
        app.session.params().orders_sheet_tab,
        Some(OrdersSheetTab::Sell)
    );
    let ids: Vec<String> = app.rows(&app.screen()).into_iter().map(|row| row.id).collect();
    assert_eq!(ids, vec!["S-ORD-2210", "S-ORD-2231", "S-ORD-2244"]);
}

#[test]
fn logout_returns_to_gate() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(3), Action::Confirm, Action::Logout]);
    assert_eq!(app.screen(), Screen::Auth { view: AuthView::Login });
    assert_eq!(app.session.view(), ViewId::Dashboard);
    assert!(app.session.order_detail().is_none());
}

#[test]
fn help_modal_swallows_next_key() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::OpenHelp]);
    assert!(app.modal.is_some());
    press(&mut app, &[Action::SwitchView(2)]);
    assert!(app.modal.is_none());
    assert_eq!(app.session.view(), ViewId::Dashboard);
}

#[test]
fn quit_exits_even_with_modal() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::OpenHelp]);
    assert!(app.handle_action(Action::Quit));
}

#[test]
fn snapshot_restores_session() {
    let mut app = signed_in_app();
    press(&mut app, &[Action::SwitchView(5), Action::Confirm, Action::OpenFlow]);
    let snapshot = app.snapshot().expect("snapshot");
    let restored: ConsoleSession = serde_json::from_str(&snapshot).expect("restore");
    assert_eq!(restored, app.session);
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(vec![
            Action::NextView,
            Action::PrevView,
            Action::MoveUp,
            Action::MoveDown,
            Action::Confirm,
            Action::Back,
            Action::OpenInSheet,
            Action::OpenFlow,
            Action::OpenLogistics,
            Action::OpenDisputes,
            Action::OpenEnquiries,
            Action::EditItem,
            Action::NextStep,
            Action::PrevStep,
            Action::FlagItem,
            Action::VerifyItem,
            Action::ForgotPassword,
            Action::RequestAccess,
            Action::Logout,
            Action::OpenHelp,
        ]),
        (0usize..10).prop_map(Action::SwitchView),
    ]
}

proptest! {
    #[test]
    fn keybinding_digit_switches_view(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let expected = if digit == 0 { 9 } else { usize::from(digit) - 1 };
        prop_assert_eq!(map_key(key(KeyCode::Char(ch))), Some(Action::SwitchView(expected)));
    }

    #[test]
    fn any_key_sequence_keeps_details_backed(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut app = signed_in_app();
        for action in actions {
            app.handle_action(action);
            assert_detail_backed(&app.session);
            let rows = app.rows(&app.screen()).len();
            prop_assert!(app.cursor == 0 || app.cursor < rows);
        }
    }
}
