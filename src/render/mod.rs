//! Presentation adapter: turns a [`ChartSpec`](crate::chart::ChartSpec) into a Plotly.js
//! figure and a standalone HTML page.
//!
//! Nothing here makes decisions about the data; it only maps spec fields onto Plotly
//! attributes.

pub mod figure;
pub mod html;

#[cfg(test)]
mod tests;

pub use figure::{FigureOptions, figure};
pub use html::html_page;
