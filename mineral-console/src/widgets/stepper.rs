//! Horizontal stepper for the financial flow.

use crate::theme::{flow_step_color, SynthBruteTheme};
use mineral_nav::FinancialFlowStep;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct FlowStepper<'a> {
    /// Step on screen.
    pub current: FinancialFlowStep,
    /// Step the transaction has reached, if known.
    pub reached: Option<FinancialFlowStep>,
    pub theme: &'a SynthBruteTheme,
}

impl<'a> FlowStepper<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let reached = self.reached.unwrap_or(self.current);
        let mut spans = Vec::new();
        for (i, step) in FinancialFlowStep::all().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" -> ", Style::default().fg(self.theme.border)));
            }
            let mut style = Style::default().fg(flow_step_color(step, reached, self.theme));
            if step == self.current {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!("{}. {}", i + 1, step.label()), style));
        }
        let widget = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Flow").borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}
