pub mod config;
pub mod convert;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
