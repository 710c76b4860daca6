//! Buffer module: the row data model.
//!
//! This module contains:
//! - [`Row`]: one logical line, raw content plus tab-expanded render form
//! - [`TextBuffer`]: the ordered row store and its file-loading boundary
//! - [`TAB_STOP`]: the tab expansion width

mod row;
mod store;

pub use row::{Row, TAB_STOP};
pub use store::TextBuffer;
