//! Error types for the navigation core.
//!
//! Navigation itself never fails. These errors only surface at the string
//! boundary, when a raw tag is parsed into one of the closed enumerations.

use thiserror::Error;

/// Failure to parse a string tag into a navigation type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown view identifier: {0}")]
    UnknownView(String),

    #[error("Unknown financial flow step: {0}")]
    UnknownFlowStep(String),

    #[error("Unknown order type: {0} (expected 'buy' or 'sell')")]
    UnknownOrderType(String),

    #[error("Unknown orders sheet tab: {0}")]
    UnknownSheetTab(String),

    #[error("Unknown auth view: {0}")]
    UnknownAuthView(String),
}

/// Result alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
