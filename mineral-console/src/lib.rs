//! Mineral admin console library exports.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod logging;
pub mod menu;
pub mod notifications;
pub mod screens;
pub mod state;
pub mod store;
pub mod theme;
pub mod widgets;
