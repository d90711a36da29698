//! Sign-in gate screens.

use crate::screens::centered;
use crate::state::App;
use mineral_nav::AuthView;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, view: AuthView, area: Rect) {
    let admin = &app.config.admin;
    let mut lines = vec![
        Line::from(Span::styled(
            view.title(),
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match view {
        AuthView::Login => {
            lines.push(Line::from(format!("Email: {}", admin.email)));
            lines.push(Line::from(format!("Role:  {}", admin.role)));
            lines.push(Line::from(""));
            lines.push(Line::from("Enter to sign in"));
            lines.push(Line::from("f  Forgot password"));
            lines.push(Line::from("r  Request access"));
        }
        AuthView::ForgotPassword => {
            lines.push(Line::from(format!(
                "A reset link will be sent to {}.",
                admin.email
            )));
            lines.push(Line::from(""));
            lines.push(Line::from("Enter to send • Esc back to sign in"));
        }
        AuthView::RequestAccess => {
            lines.push(Line::from(
                "Ask a super-admin to grant console access for this address.",
            ));
            lines.push(Line::from(""));
            lines.push(Line::from("Enter to submit • Esc back to sign in"));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Admin Console")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(widget, centered(area, 50, 50));
}
