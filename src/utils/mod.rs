// Shared utils

pub mod constants;
pub mod storage;
