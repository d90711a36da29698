//! Reusable widget components.

pub mod breadcrumb;
pub mod detail;
pub mod stepper;

pub use breadcrumb::Breadcrumb;
pub use detail::DetailPanel;
pub use stepper::FlowStepper;
