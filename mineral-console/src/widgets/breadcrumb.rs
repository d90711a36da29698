//! Breadcrumb trail for the header.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub struct Breadcrumb {
    pub parts: Vec<String>,
    pub style: Style,
    pub last_style: Style,
}

impl Breadcrumb {
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.parts.len() * 2);
        let last = self.parts.len().saturating_sub(1);
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" > ", self.style));
            }
            let style = if i == last { self.last_style } else { self.style };
            spans.push(Span::styled(part.clone(), style));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_parts() {
        let crumb = Breadcrumb {
            parts: vec!["Finance".into(), "TXN-001".into(), "Reserve Escrow".into()],
            style: Style::default(),
            last_style: Style::default(),
        };
        let text: String = crumb.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Finance > TXN-001 > Reserve Escrow");
    }
}
