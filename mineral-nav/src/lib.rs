//! Mineral Nav - Admin Console Navigation Core
//!
//! The view-navigation state machine behind the minerals admin console.
//! One [`ConsoleSession`] owns the active view, its params, the open order
//! detail and the sign-in gate. Screens read it and hand back
//! [`NavRequest`]s; [`resolve`] decides what actually renders.
//!
//! No I/O happens here. Transitions are synchronous and never fail.

pub mod auth;
pub mod error;
pub mod flow;
pub mod order;
pub mod params;
pub mod request;
pub mod resolve;
pub mod session;
pub mod view;

pub use auth::{AdminUser, AuthGate, AuthView};
pub use error::{ParseError, ParseResult};
pub use flow::{view_to_step, view_to_step_label, FinancialFlowStep};
pub use order::{DetailOrigin, OrderDetailRef, OrderType};
pub use params::{OrdersSheetTab, ParamField, ViewParams};
pub use request::NavRequest;
pub use resolve::{resolve, Fallback, Resolution, Screen};
pub use session::ConsoleSession;
pub use view::{ViewId, ViewKind};
