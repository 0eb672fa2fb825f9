//! Chart view-model builders.
//!
//! One module per dashboard chart. Builders take the validated daily panel
//! by reference, derive whatever windowed or aggregated series the chart
//! needs, and return a plain serializable struct.

pub mod annual_returns;
pub mod bubble_year;
pub mod cumulative;
pub mod decade_scatter;
pub mod rolling;
pub mod yield_comparison;

pub(crate) mod util;
