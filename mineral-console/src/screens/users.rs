//! User management and enquiries.

use crate::screens::helpers::{render_rows, two_column};
use crate::state::App;
use crate::theme::kyc_color;
use crate::widgets::DetailPanel;
use mineral_nav::Screen;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

fn user_items<'a>(app: &App, screen: &Screen) -> Vec<ListItem<'a>> {
    app.rows(screen)
        .into_iter()
        .filter_map(|row| app.store.user(&row.id))
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<8}{:<18}", user.id, user.name)),
                Span::styled(
                    user.kyc.as_str(),
                    Style::default().fg(kyc_color(user.kyc, &app.theme)),
                ),
            ]))
        })
        .collect()
}

fn user_panel<'a>(app: &App, user_id: Option<&str>, title: &'a str) -> DetailPanel<'a> {
    let mut panel = DetailPanel::new(title, Style::default().fg(app.theme.secondary));
    if let Some(user) = user_id.and_then(|id| app.store.user(id)) {
        let orders = app
            .store
            .orders
            .iter()
            .filter(|o| o.user_id == user.id)
            .map(|o| o.id.clone())
            .collect::<Vec<_>>()
            .join(", ");
        panel = panel
            .field("User", user.id.clone())
            .field("Name", user.name.clone())
            .field("Company", user.company.clone())
            .field("KYC", user.kyc.as_str())
            .field("Orders", orders);
    }
    panel
}

pub fn render_users(
    f: &mut Frame<'_>,
    app: &App,
    screen: &Screen,
    selected_user_id: Option<&str>,
    area: Rect,
) {
    let (left, right) = two_column(area, 55);
    render_rows(f, app, "Users", user_items(app, screen), left);
    user_panel(app, selected_user_id, "User [Enter select • n enquiries • x flag • v verify]").render(f, right);
}

pub fn render_enquiries(
    f: &mut Frame<'_>,
    app: &App,
    screen: &Screen,
    user_id: Option<&str>,
    area: Rect,
) {
    let (left, right) = two_column(area, 55);
    let title = match user_id {
        Some(_) => "Enquiries (filtered, Esc clears)",
        None => "Enquiries",
    };
    render_rows(f, app, title, user_items(app, screen), left);
    user_panel(app, user_id, "Enquirer").render(f, right);
}
