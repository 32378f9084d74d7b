// Shared utils

pub mod chart_ffi;
pub mod constants;

pub use constants::*;
