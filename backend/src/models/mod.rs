//! Domain models used by the API
//!
//! Re-exports models from the shared crate so handlers and the WASM client
//! serialize exactly the same shapes

pub use shared::models::*;
