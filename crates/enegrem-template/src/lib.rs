//! Comparison page rendering for ENEGREM
//!
//! Renders the single page of the tool with minijinja. The page shows:
//!
//! - one chip per observed letter with its signed count
//!   (`balanced`, `missing` or `overused`, counts above 100 shown as `99+`)
//! - the source letters still unused (`_` for consumed positions), or a
//!   completion banner once the candidate uses every letter
//! - the two text areas, with the candidate disabled while the source is empty
//!
//! # Filters
//!
//! - `| count_label` - Display label for a letter count
//! - `| letter_status` - CSS class for a letter count
//! - `| letter_cell` - Letter or `_` for a remaining-letters cell

mod engine;
mod error;
mod filters;

pub use engine::{PageRenderer, PAGE_TEMPLATE};
pub use error::{TemplateError, TemplateResult};
pub use filters::{count_label, letter_cell, letter_status, COUNT_DISPLAY_LIMIT};
