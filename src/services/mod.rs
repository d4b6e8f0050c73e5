pub mod location_provider;

#[cfg(target_arch = "wasm32")]
pub mod browser_geolocation;

#[cfg(test)]
pub mod testing;

pub use location_provider::*;

#[cfg(target_arch = "wasm32")]
pub use browser_geolocation::BrowserGeolocationProvider;
