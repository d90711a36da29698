//! Financial management and the six-step settlement flow.

use crate::screens::helpers::{render_rows, render_text, two_column, usd};
use crate::state::App;
use crate::widgets::{DetailPanel, FlowStepper};
use mineral_nav::{FinancialFlowStep, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::ListItem,
    Frame,
};

pub fn render_overview(
    f: &mut Frame<'_>,
    app: &App,
    screen: &Screen,
    transaction_id: Option<&str>,
    area: Rect,
) {
    let (left, right) = two_column(area, 55);
    let items: Vec<ListItem> = app
        .rows(screen)
        .into_iter()
        .filter_map(|row| app.store.transaction(&row.id))
        .map(|t| {
            ListItem::new(format!(
                "{:<9}{:<12}{:>12}  {}",
                t.id,
                t.order_id,
                usd(t.amount_usd),
                t.step.label()
            ))
        })
        .collect();
    render_rows(f, app, "Transactions [Enter select • t open flow]", items, left);

    let mut panel = DetailPanel::new("Transaction", Style::default().fg(app.theme.secondary));
    if let Some(txn) = transaction_id.and_then(|id| app.store.transaction(id)) {
        panel = panel
            .field("ID", txn.id.clone())
            .field("Order", txn.order_id.clone())
            .field("Amount", usd(txn.amount_usd))
            .field("Reached", txn.step.label());
    }
    panel.render(f, right);
}

pub fn render_flow(
    f: &mut Frame<'_>,
    app: &App,
    step: FinancialFlowStep,
    transaction_id: &str,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let txn = app.store.transaction(transaction_id);
    FlowStepper {
        current: step,
        reached: txn.map(|t| t.step),
        theme: &app.theme,
    }
    .render(f, chunks[0]);

    let mut lines = vec![step_instructions(step).to_string(), String::new()];
    match txn {
        Some(txn) => {
            lines.push(format!("Transaction {} for order {}", txn.id, txn.order_id));
            lines.push(format!("Amount {}", usd(txn.amount_usd)));
        }
        None => lines.push(format!("{} is not in the ledger", transaction_id)),
    }
    lines.push(String::new());
    lines.push("] next step • [ previous step • Esc back to finance".to_string());
    render_text(f, app, step.label(), lines, chunks[1]);
}

pub fn render_placeholder(f: &mut Frame<'_>, app: &App, step: FinancialFlowStep, area: Rect) {
    render_text(
        f,
        app,
        step.label(),
        vec![
            "No transaction selected.".to_string(),
            String::new(),
            "Pick a transaction in Finance first. Enter or Esc goes back to Finance.".to_string(),
        ],
        area,
    );
}

fn step_instructions(step: FinancialFlowStep) -> &'static str {
    match step {
        FinancialFlowStep::SendQr => "Send the payment QR code to the buyer.",
        FinancialFlowStep::CallBuyer => "Call the buyer to confirm terms and payment timing.",
        FinancialFlowStep::ReserveEscrow => "Reserve the purchase amount in escrow.",
        FinancialFlowStep::Testing => "Await assay results from the testing lab.",
        FinancialFlowStep::LcIssued => "Confirm the letter of credit has been issued.",
        FinancialFlowStep::Release => "Release escrowed funds to the seller.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_step_has_instructions() {
        for step in FinancialFlowStep::all() {
            assert!(!step_instructions(step).is_empty());
        }
    }
}
