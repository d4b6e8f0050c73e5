// Módulo de mapas: una superficie por capacidad, elegida en tiempo de ejecución

pub mod traits;
pub mod native;
pub mod web;
pub mod fallback;

pub use traits::*;
pub use native::{RegionFrame, RegionMapSurface};
pub use web::ProjectedMapSurface;
pub use fallback::TextMapSurface;

use crate::config::MapConfig;

impl MapCapability {
    /// Capacidad por defecto de la plataforma actual.
    /// En web, sin API key no hay mapa JS y se cae al texto.
    pub fn for_platform(config: &MapConfig) -> Self {
        if !cfg!(target_arch = "wasm32") {
            MapCapability::NativeRegion
        } else if config.api_key().is_some() {
            MapCapability::CenterZoom
        } else {
            MapCapability::TextOnly
        }
    }
}

/// Crear la superficie para una capacidad
pub fn surface_for(
    capability: MapCapability,
    config: &MapConfig,
) -> Result<Box<dyn MapSurface>, MapError> {
    let surface: Box<dyn MapSurface> = match capability {
        MapCapability::NativeRegion => Box::new(RegionMapSurface::new()),
        MapCapability::CenterZoom => Box::new(ProjectedMapSurface::new(config)?),
        MapCapability::TextOnly => Box::new(TextMapSurface::new()),
    };
    Ok(surface)
}
