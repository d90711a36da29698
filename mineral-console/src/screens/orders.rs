//! Order sheet, order details, logistics and disputes.

use crate::screens::helpers::{order_item, render_rows, render_text, tonnes, two_column, usd};
use crate::state::App;
use crate::widgets::DetailPanel;
use mineral_nav::{OrdersSheetTab, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

fn order_items<'a>(app: &App, screen: &Screen) -> Vec<ListItem<'a>> {
    app.rows(screen)
        .into_iter()
        .filter_map(|row| app.store.order(&row.id))
        .map(|order| order_item(app, order))
        .collect()
}

pub fn render_list(
    f: &mut Frame<'_>,
    app: &App,
    screen: &Screen,
    sheet_tab: Option<OrdersSheetTab>,
    selected_transaction_id: Option<&str>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut tabs = vec![Span::raw("[ ")];
    for tab in OrdersSheetTab::all() {
        let style = if Some(tab) == sheet_tab {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        tabs.push(Span::styled(format!(" {} ", tab.as_str()), style));
    }
    tabs.push(Span::raw(" ]"));
    f.render_widget(
        Paragraph::new(Line::from(tabs))
            .block(Block::default().title("Sheets").borders(Borders::ALL)),
        chunks[0],
    );

    let (left, right) = two_column(chunks[1], 60);
    render_rows(
        f,
        app,
        "Orders [Enter open • t flow • l logistics • d disputes]",
        order_items(app, screen),
        left,
    );

    let mut panel = DetailPanel::new("Transaction", Style::default().fg(app.theme.secondary));
    panel.empty = "No transaction selected";
    if let Some(txn) = selected_transaction_id.and_then(|id| app.store.transaction(id)) {
        panel = panel
            .field("ID", txn.id.clone())
            .field("Order", txn.order_id.clone())
            .field("Amount", usd(txn.amount_usd))
            .field("Step", txn.step.label());
    }
    panel.render(f, right);
}

pub fn render_detail(f: &mut Frame<'_>, app: &App, order_id: &str, title: &str, area: Rect) {
    let (left, right) = two_column(area, 55);
    let order = app.store.order(order_id);

    let mut panel = DetailPanel::new(title, Style::default().fg(app.theme.secondary));
    panel.empty = "Order not found";
    if let Some(order) = order {
        panel = panel
            .field("Order", order.id.clone())
            .field("Side", order.order_type.as_str())
            .field("Tonnes", tonnes(order.tonnes))
            .field("Status", order.status.clone())
            .field(
                "Transaction",
                order.transaction_id.clone().unwrap_or_else(|| "-".to_string()),
            );
    }
    panel.render(f, left);

    let mut lines = Vec::new();
    if let Some(order) = order {
        if let Some(user) = app.store.user(&order.user_id) {
            lines.push(format!("Counterparty: {} ({})", user.name, user.company));
        }
        if let Some(mineral) = app.store.mineral(&order.mineral_id) {
            lines.push(format!(
                "Mineral: {} {} @ {}/t",
                mineral.name,
                mineral.grade,
                usd(mineral.price_per_tonne_usd)
            ));
            lines.push(format!(
                "Notional: {}",
                usd(mineral.price_per_tonne_usd * order.tonnes)
            ));
        }
    }
    lines.push(String::new());
    lines.push("t flow • l logistics • d disputes • Esc close".to_string());
    render_text(f, app, "Context", lines, right);
}

pub fn render_tracking(
    f: &mut Frame<'_>,
    app: &App,
    screen: &Screen,
    title: &str,
    order_id: Option<&str>,
    area: Rect,
) {
    let (left, right) = two_column(area, 55);
    render_rows(
        f,
        app,
        &format!("{} [Enter focus • o open order]", title),
        order_items(app, screen),
        left,
    );

    let mut panel = DetailPanel::new("Focused order", Style::default().fg(app.theme.tertiary));
    if let Some(order) = order_id.and_then(|id| app.store.order(id)) {
        panel = panel
            .field("Order", order.id.clone())
            .field("Status", order.status.clone())
            .field("Tonnes", tonnes(order.tonnes));
    }
    panel.render(f, right);
}
