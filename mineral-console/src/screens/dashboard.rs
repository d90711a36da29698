//! Dashboard: recent orders and pending submissions.

use crate::screens::helpers::{order_item, render_rows, two_column, usd};
use crate::state::{App, RowKind};
use crate::store::KycStatus;
use crate::widgets::DetailPanel;
use mineral_nav::Screen;
use ratatui::{layout::Rect, style::Style, widgets::ListItem, Frame};

pub fn render(f: &mut Frame<'_>, app: &App, screen: &Screen, area: Rect) {
    let (left, right) = two_column(area, 60);

    let items: Vec<ListItem> = app
        .rows(screen)
        .into_iter()
        .filter_map(|row| match row.kind {
            RowKind::Order(_) => app.store.order(&row.id).map(|o| order_item(app, o)),
            RowKind::Submission => app.store.submission(&row.id).map(|s| {
                ListItem::new(format!("SUB   {}  {}  [{}]", s.id, s.mineral_id, s.status))
            }),
            _ => None,
        })
        .collect();
    render_rows(f, app, "Recent Activity", items, left);

    let escrow: f64 = app.store.transactions.iter().map(|t| t.amount_usd).sum();
    let pending_kyc = app
        .store
        .users
        .iter()
        .filter(|u| u.kyc == KycStatus::Pending)
        .count();
    let flagged = app
        .store
        .users
        .iter()
        .filter(|u| u.kyc == KycStatus::Flagged)
        .count();
    DetailPanel::new("Overview", Style::default().fg(app.theme.secondary))
        .field("Open orders", app.store.orders.len().to_string())
        .field("In escrow", usd(escrow))
        .field("KYC pending", pending_kyc.to_string())
        .field("Flagged users", flagged.to_string())
        .field("Submissions", app.store.submissions.len().to_string())
        .render(f, right);
}
