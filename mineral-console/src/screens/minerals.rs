//! Mineral catalogue, mineral detail and edit form, seller submissions.

use crate::screens::helpers::{render_rows, render_text, two_column, usd};
use crate::state::App;
use crate::widgets::DetailPanel;
use mineral_nav::Screen;
use ratatui::{layout::Rect, style::Style, widgets::ListItem, Frame};

pub fn render_list(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    let (left, right) = two_column(area, 55);
    let rows = app.rows(screen);
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| app.store.mineral(&row.id))
        .map(|m| ListItem::new(format!("{:<7}{:<16}{}", m.id, m.name, m.grade)))
        .collect();
    render_rows(f, app, "Minerals [Enter open • e edit]", items, left);

    let mut panel = DetailPanel::new("Listing", Style::default().fg(app.theme.secondary));
    if let Some(mineral) = rows.get(app.cursor).and_then(|row| app.store.mineral(&row.id)) {
        panel = panel
            .field("Price / t", usd(mineral.price_per_tonne_usd))
            .field(
                "Open orders",
                app.store
                    .orders
                    .iter()
                    .filter(|o| o.mineral_id == mineral.id)
                    .count()
                    .to_string(),
            );
    }
    panel.render(f, right);
}

pub fn render_detail(f: &mut Frame<'_>, app: &App, mineral_id: &str, area: Rect) {
    let mut panel = DetailPanel::new(
        "Mineral [e edit • Esc back]",
        Style::default().fg(app.theme.secondary),
    );
    panel.empty = "Mineral not found";
    if let Some(mineral) = app.store.mineral(mineral_id) {
        panel = panel
            .field("ID", mineral.id.clone())
            .field("Name", mineral.name.clone())
            .field("Grade", mineral.grade.clone())
            .field("Price / t", usd(mineral.price_per_tonne_usd));
    }
    panel.render(f, area);
}

pub fn render_form(f: &mut Frame<'_>, app: &App, mineral_id: &str, area: Rect) {
    let lines = match app.store.mineral(mineral_id) {
        Some(mineral) => vec![
            format!("Name:      {}", mineral.name),
            format!("Grade:     {}", mineral.grade),
            format!("Price / t: {}", usd(mineral.price_per_tonne_usd)),
            String::new(),
            "Enter save • Esc discard".to_string(),
        ],
        None => vec![format!("{} is not in the catalogue", mineral_id)],
    };
    render_text(f, app, &format!("Edit {}", mineral_id), lines, area);
}

pub fn render_submission(f: &mut Frame<'_>, app: &App, submission_id: &str, area: Rect) {
    let (left, right) = two_column(area, 50);
    let submission = app.store.submission(submission_id);

    let mut panel = DetailPanel::new("Submission", Style::default().fg(app.theme.secondary));
    panel.empty = "Submission not found";
    if let Some(s) = submission {
        panel = panel
            .field("ID", s.id.clone())
            .field("Status", s.status.clone())
            .field("Mineral", s.mineral_id.clone());
    }
    panel.render(f, left);

    let mut seller = DetailPanel::new("Seller", Style::default().fg(app.theme.tertiary));
    if let Some(user) = submission.and_then(|s| app.store.user(&s.seller_id)) {
        seller = seller
            .field("User", user.id.clone())
            .field("Name", user.name.clone())
            .field("Company", user.company.clone());
    }
    seller.render(f, right);
}
