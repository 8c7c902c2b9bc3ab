//! Stack selection module
//!
//! Turns the stack tool's text output into an ordered list of commits and
//! maps a picker selection onto the review base for that commit.

pub mod selector;

pub use selector::{
    bottom_offset_to_top_index, top_index_to_bottom_offset, ReviewBase, Selection, Stack,
    StackLine,
};
