// ============================================================================
// NATIVE REGION SURFACE - Control de mapa nativo que acepta regiones
// ============================================================================

use serde::Serialize;

use super::{MapCapability, MapError, MapSurface};
use crate::models::{MapAnnotation, Region};
use crate::viewmodels::MapView;

/// Lo que recibe el control nativo: la región tal cual, sin proyectar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionFrame {
    pub region: Region,
    pub annotations: Vec<MapAnnotation>,
    pub shows_user_location: bool,
}

type FrameCallback = Box<dyn FnMut(&RegionFrame)>;

/// Superficie para plataformas con control de mapa nativo.
/// El host (binding móvil) recibe cada frame por callback.
pub struct RegionMapSurface {
    last_frame: Option<RegionFrame>,
    on_frame: Option<FrameCallback>,
}

impl RegionMapSurface {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            on_frame: None,
        }
    }

    /// Establecer el callback que entrega los frames al control nativo
    pub fn set_frame_callback(&mut self, callback: impl FnMut(&RegionFrame) + 'static) {
        self.on_frame = Some(Box::new(callback));
    }

    pub fn last_frame(&self) -> Option<&RegionFrame> {
        self.last_frame.as_ref()
    }
}

impl Default for RegionMapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for RegionMapSurface {
    fn capability(&self) -> MapCapability {
        MapCapability::NativeRegion
    }

    fn render(&mut self, view: &MapView) -> Result<(), MapError> {
        let region = view.region.ok_or(MapError::MissingRegion)?;

        let frame = RegionFrame {
            region,
            annotations: view.annotations.clone(),
            shows_user_location: view.shows_user_location,
        };

        if let Some(callback) = self.on_frame.as_mut() {
            callback(&frame);
        }

        log::info!(
            "🗺️ Región nativa: ({:.5}, {:.5}) span {}",
            region.latitude,
            region.longitude,
            region.latitude_delta
        );
        self.last_frame = Some(frame);
        Ok(())
    }
}
