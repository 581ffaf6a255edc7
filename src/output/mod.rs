//! Output formatting for subnet plans.
//!
//! This module handles rendering a computed plan:
//! - [`json`] - JSON document output
//! - [`report`] - the plain-text solution report
//! - [`terminal`] - column formatting and the banner

mod json;
mod report;
mod terminal;

pub use json::render_json;
pub use report::{print_report, render_report};
pub use terminal::{banner, column, print_banner};
