//! Pages without selection state.

use crate::screens::helpers::{render_rows, render_text};
use crate::state::App;
use crate::widgets::DetailPanel;
use mineral_nav::Screen;
use ratatui::{layout::Rect, style::Style, widgets::ListItem, Frame};

pub fn render_audit_log(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    let items: Vec<ListItem> = app
        .rows(screen)
        .into_iter()
        .filter_map(|row| row.id.parse::<usize>().ok())
        .filter_map(|i| app.store.activity.get(i))
        .map(|entry| {
            ListItem::new(format!(
                "{}  {:<22}{}",
                entry.at.format("%H:%M:%S"),
                entry.actor,
                entry.message
            ))
        })
        .collect();
    render_rows(f, app, "Audit Log", items, area);
}

pub fn render_notifications(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = app
        .notifications
        .iter()
        .rev()
        .map(|n| {
            format!(
                "{} {:<6}{}",
                n.created_at.format("%H:%M:%S"),
                n.level.label(),
                n.message
            )
        })
        .collect::<Vec<_>>();
    let lines = if lines.is_empty() {
        vec!["No notifications".to_string()]
    } else {
        lines
    };
    render_text(f, app, "Notifications", lines, area);
}

pub fn render_profile(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut panel = DetailPanel::new("Profile", Style::default().fg(app.theme.secondary));
    if let Some(user) = app.session.user() {
        panel = panel
            .field("Name", user.name.clone())
            .field("Email", user.email.clone())
            .field("Role", user.role.clone())
            .field("Signed in", user.signed_in_at.to_rfc3339())
            .field("Session", user.id.to_string());
    }
    panel.render(f, area);
}

/// Sections that show a title and a short description.
pub fn render_static(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    let body = match screen {
        Screen::Content => "Marketplace pages, banners and announcements.",
        Screen::Analytics => "Trade volume, settlement times and conversion.",
        Screen::Partners => "Testing labs, logistics carriers and banks.",
        Screen::Insurance => "Cargo insurance policies and claims.",
        Screen::Settings => "Console preferences and fee schedules.",
        Screen::CallHistory => "Recorded buyer and seller calls.",
        Screen::Help => "Press ? for keybindings.",
        Screen::Search => "Search across users, orders and minerals.",
        _ => "",
    };
    let title = screen
        .view()
        .map(|view| view.title())
        .unwrap_or_else(|| screen.component());
    render_text(f, app, title, vec![body.to_string()], area);
}
