pub mod cli;
pub mod config;
pub mod errors;
pub mod review;
pub mod stack;
pub mod tool;
pub mod utils;

pub use errors::StackReviewError;
