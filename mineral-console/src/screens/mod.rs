//! Screen rendering dispatch.
//!
//! Rendering reads the resolved [`Screen`]; it never looks at the raw view
//! identifier, so a fallback renders exactly like the screen it names.

pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod helpers;
pub mod minerals;
pub mod orders;
pub mod pages;
pub mod users;

use crate::menu;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::widgets::Breadcrumb;
use mineral_nav::Screen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render_screen(f: &mut Frame<'_>, app: &App) {
    let screen = app.screen();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, &screen, layout[0]);

    if let Screen::Auth { view } = &screen {
        auth::render(f, app, *view, layout[1]);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(layout[1]);
        render_menu(f, app, body[0]);
        render_body(f, app, &screen, body[1]);
    }

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, app, &modal.title, &modal.message);
    }
}

fn render_body(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    match screen {
        Screen::Auth { .. } => {}
        Screen::Dashboard => dashboard::render(f, app, screen, area),
        Screen::Users { selected_user_id } => {
            users::render_users(f, app, screen, selected_user_id.as_deref(), area)
        }
        Screen::Enquiries { user_id } => {
            users::render_enquiries(f, app, screen, user_id.as_deref(), area)
        }
        Screen::Minerals => minerals::render_list(f, app, screen, area),
        Screen::MineralDetail { mineral_id } => minerals::render_detail(f, app, mineral_id, area),
        Screen::MineralForm { mineral_id } => minerals::render_form(f, app, mineral_id, area),
        Screen::SellSubmissionDetail { submission_id } => {
            minerals::render_submission(f, app, submission_id, area)
        }
        Screen::OrderList {
            sheet_tab,
            selected_transaction_id,
            ..
        } => orders::render_list(f, app, screen, *sheet_tab, selected_transaction_id.as_deref(), area),
        Screen::OrderSheetDetail { order } => {
            orders::render_detail(f, app, &order.order_id, "Order", area)
        }
        Screen::SellOrderDetail { order_id } => {
            orders::render_detail(f, app, order_id, "Sell Order", area)
        }
        Screen::BuyOrderDetail { order_id } => {
            orders::render_detail(f, app, order_id, "Buy Order", area)
        }
        Screen::Logistics { order_id } => {
            orders::render_tracking(f, app, screen, "Logistics", order_id.as_deref(), area)
        }
        Screen::Disputes { order_id } => {
            orders::render_tracking(f, app, screen, "Disputes", order_id.as_deref(), area)
        }
        Screen::Finance { transaction_id } => {
            finance::render_overview(f, app, screen, transaction_id.as_deref(), area)
        }
        Screen::FinancialFlow {
            step,
            transaction_id,
        } => finance::render_flow(f, app, *step, transaction_id, area),
        Screen::NoTransactionSelected { step } => finance::render_placeholder(f, app, *step, area),
        Screen::AuditLog => pages::render_audit_log(f, app, screen, area),
        Screen::Notifications => pages::render_notifications(f, app, area),
        Screen::Profile => pages::render_profile(f, app, area),
        other => pages::render_static(f, app, other, area),
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    let who = app
        .session
        .user()
        .map(|user| format!("{} ({})", user.name, user.role))
        .unwrap_or_else(|| "signed out".to_string());
    let crumb = Breadcrumb {
        parts: screen.breadcrumb(),
        style: Style::default().fg(app.theme.text_dim),
        last_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            format!("MINERAL ADMIN | {}", who),
            Style::default().fg(app.theme.primary),
        ));
    f.render_widget(Paragraph::new(crumb.line()).block(block), area);
}

fn render_menu(f: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem> = menu::entries()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let hotkey = if i < 9 {
                format!("{} ", i + 1)
            } else if i == 9 {
                "0 ".to_string()
            } else {
                "  ".to_string()
            };
            ListItem::new(format!("{}{}", hotkey, view.title()))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(menu::index(app.session.view())));

    let list = List::new(items)
        .block(Block::default().title("Menu").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.bg)
                .bg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, area, &mut state);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = if app.session.is_authenticated() {
        "Tab section • j/k move • Enter open • Esc back • ? keys • q quit"
    } else {
        "Enter continue • f forgot password • r request access • Esc back • q quit"
    };
    let (text, style) = match app.notifications.last() {
        Some(note) => {
            let color = match note.level {
                NotificationLevel::Info => app.theme.info,
                NotificationLevel::Warning => app.theme.warning,
                NotificationLevel::Error => app.theme.error,
                NotificationLevel::Success => app.theme.success,
            };
            (
                format!("{}: {}  |  {}", note.level.label(), note.message, help),
                Style::default().fg(color),
            )
        }
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, title: &str, message: &str) {
    let area = centered(f.size(), 70, 40);
    let lines: Vec<Line> = message.lines().map(Line::from).collect();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

/// A rectangle `percent_x` by `percent_y` of `area`, centred in it.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
