//! Terminal UI components (spinner, colors).

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;
