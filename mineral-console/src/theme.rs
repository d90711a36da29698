//! SynthBrute theme and color utilities.

use crate::store::KycStatus;
use mineral_nav::{FinancialFlowStep, OrderType};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct SynthBruteTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SynthBruteTheme {
    pub fn synthbrute() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }
}

pub fn order_type_color(order_type: OrderType, theme: &SynthBruteTheme) -> Color {
    match order_type {
        OrderType::Buy => theme.primary,
        OrderType::Sell => theme.secondary,
    }
}

pub fn kyc_color(status: KycStatus, theme: &SynthBruteTheme) -> Color {
    match status {
        KycStatus::Pending => theme.warning,
        KycStatus::Verified => theme.success,
        KycStatus::Flagged => theme.error,
    }
}

/// Colour of a flow step relative to the step a transaction has reached.
pub fn flow_step_color(
    step: FinancialFlowStep,
    reached: FinancialFlowStep,
    theme: &SynthBruteTheme,
) -> Color {
    if step.position() < reached.position() {
        theme.success
    } else if step == reached {
        theme.tertiary
    } else {
        theme.text_dim
    }
}
