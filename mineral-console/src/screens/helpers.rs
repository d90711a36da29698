//! Common screen rendering helpers.

use crate::state::App;
use crate::store::OrderRecord;
use crate::theme::order_type_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Two columns, `left_percent` wide on the left.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// A list with the app cursor highlighted.
pub fn render_rows(f: &mut Frame<'_>, app: &App, title: &str, items: Vec<ListItem<'_>>, area: Rect) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.cursor.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(app.theme.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

pub fn order_item<'a>(app: &App, order: &OrderRecord) -> ListItem<'a> {
    let mineral = app
        .store
        .mineral(&order.mineral_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| order.mineral_id.clone());
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<5}", order.order_type.as_str().to_uppercase()),
            Style::default().fg(order_type_color(order.order_type, &app.theme)),
        ),
        Span::raw(format!(
            "{}  {}  {}t  [{}]",
            order.id,
            mineral,
            tonnes(order.tonnes),
            order.status
        )),
    ]))
}

/// Paragraph of plain lines inside a titled block.
pub fn render_text(f: &mut Frame<'_>, app: &App, title: &str, lines: Vec<String>, area: Rect) {
    let lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let widget = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(widget, area);
}

pub fn usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn tonnes(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_groups_thousands() {
        assert_eq!(usd(712_500.0), "$712,500");
        assert_eq!(usd(285.0), "$285");
        assert_eq!(usd(-1_000.0), "-$1,000");
    }

    #[test]
    fn test_tonnes_trims_whole_numbers() {
        assert_eq!(tonnes(2_500.0), "2500");
        assert_eq!(tonnes(0.8), "0.80");
    }
}
