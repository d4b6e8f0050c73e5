// ============================================================================
// PROJECTED MAP SURFACE - API JS de mapas (solo centro + zoom)
// ============================================================================
// La región se proyecta a viewport antes de cruzar a JS
// ============================================================================

use super::{MapCapability, MapError, MapSurface};
use crate::config::MapConfig;
use crate::viewmodels::{MapView, Viewport, ViewportProjector};

pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Renderizador para APIs de mapas que solo entienden centro + zoom
pub struct ProjectedMapSurface {
    api_key: String,
    container_id: String,
    initialized: bool,
    last_viewport: Option<Viewport>,
}

impl ProjectedMapSurface {
    /// La API key llega por configuración; sin key no hay mapa
    pub fn new(config: &MapConfig) -> Result<Self, MapError> {
        let api_key = config.api_key().ok_or(MapError::MissingApiKey)?;
        Ok(Self {
            api_key: api_key.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            initialized: false,
            last_viewport: None,
        })
    }

    pub fn with_container(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn last_viewport(&self) -> Option<&Viewport> {
        self.last_viewport.as_ref()
    }

    #[cfg(target_arch = "wasm32")]
    fn push_to_js(&mut self, viewport: &Viewport) -> Result<(), MapError> {
        use crate::utils::maps_ffi::{init_map, set_map_markers, set_map_viewport};
        use gloo_timers::callback::Timeout;

        let markers_json = serde_json::to_string(&viewport.markers)
            .map_err(|e| MapError::Render(format!("Error serializando markers: {}", e)))?;
        let (lat, lng, zoom) = (viewport.center.lat, viewport.center.lng, viewport.zoom);

        if self.initialized {
            set_map_viewport(lat, lng, zoom);
            set_map_markers(&markers_json);
            return Ok(());
        }

        log::info!("🗺️ Inicializando mapa JS en #{}", self.container_id);
        init_map(&self.container_id, &self.api_key);
        self.initialized = true;

        // Primer frame con un pequeño retraso para que el mapa termine de cargar
        Timeout::new(100, move || {
            set_map_viewport(lat, lng, zoom);
            set_map_markers(&markers_json);
            log::info!("✅ Viewport inicial enviado al mapa");
        })
        .forget();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn push_to_js(&mut self, _viewport: &Viewport) -> Result<(), MapError> {
        self.initialized = true;
        Ok(())
    }
}

impl MapSurface for ProjectedMapSurface {
    fn capability(&self) -> MapCapability {
        MapCapability::CenterZoom
    }

    fn render(&mut self, view: &MapView) -> Result<(), MapError> {
        let region = view.region.ok_or(MapError::MissingRegion)?;
        let viewport = ViewportProjector::project(&region, &view.annotations);

        log::info!(
            "🗺️ Viewport: ({:.5}, {:.5}) zoom {} - {} markers",
            viewport.center.lat,
            viewport.center.lng,
            viewport.zoom,
            viewport.markers.len()
        );

        self.push_to_js(&viewport)?;
        self.last_viewport = Some(viewport);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, MapAnnotation, Region};

    fn keyed_config() -> MapConfig {
        MapConfig {
            api_key: Some("test-key".to_string()),
            ..MapConfig::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        assert_eq!(
            ProjectedMapSurface::new(&MapConfig::default()).err(),
            Some(MapError::MissingApiKey)
        );
        let surface = ProjectedMapSurface::new(&keyed_config()).unwrap();
        assert_eq!(surface.api_key(), "test-key");
        assert!(!surface.is_ready());
    }

    #[test]
    fn test_render_projects_region() {
        let mut surface = ProjectedMapSurface::new(&keyed_config())
            .unwrap()
            .with_container("parking-map");
        let view = MapView {
            region: Some(Region::new(37.7749, -122.4194, 0.2, 0.2)),
            annotations: vec![
                MapAnnotation::Label { text: "ignored".to_string() },
                MapAnnotation::marker(Coordinate::new(37.7749, -122.4194), Some("You are here")),
            ],
            shows_user_location: true,
        };

        surface.render(&view).unwrap();

        let viewport = surface.last_viewport().unwrap();
        assert_eq!(viewport.center.lat, 37.7749);
        assert_eq!(viewport.center.lng, -122.4194);
        assert_eq!(viewport.zoom, 11);
        assert_eq!(viewport.markers.len(), 1);
        assert!(surface.is_ready());
    }
}
