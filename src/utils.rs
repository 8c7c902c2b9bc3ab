/// ANSI escape-sequence removal for external tool output
pub mod ansi;

/// Progress spinner shown while the external tool runs
pub mod spinner;
