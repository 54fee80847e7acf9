// Shared utils

pub mod board_ffi;
pub mod constants;
pub mod storage;

pub use constants::*;
