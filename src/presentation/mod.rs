//! Presentation boundary: turns aggregated tables into serializable chart
//! specifications and the tab/column layout consumed by the browser.

pub mod charts;
pub mod layout;

pub use charts::{BarChart, Chart, GeoChart, GeoPoint, LineChart, LineSeries, Orientation};
pub use layout::{Column, Dashboard, Metric, Tab};
