// Utils compartidos

#[cfg(target_arch = "wasm32")]
pub mod maps_ffi;
