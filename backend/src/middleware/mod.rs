//! HTTP middleware

pub mod timing;

pub use timing::{request_timing, PROCESS_TIME_HEADER};
