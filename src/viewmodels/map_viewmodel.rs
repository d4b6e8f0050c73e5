// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica pura - Sin estado
// ============================================================================

use serde::Serialize;

use crate::config::MapConfig;
use crate::models::{Coordinate, LatLng, MapAnnotation, MarkerDescriptor, Region};
use crate::state::SessionSnapshot;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 20;

/// Suelo para spans nulos o negativos
pub const SPAN_EPSILON: f64 = 1e-6;

pub const USER_MARKER_TITLE: &str = "You are here";

/// Centro + zoom discreto, para superficies que no aceptan una región
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<MarkerDescriptor>,
}

/// Proyección región → viewport para mapas sin soporte nativo de región
pub struct ViewportProjector;

impl ViewportProjector {
    /// `round(log2(360 / max(latitude_delta, ε)))` acotado a [MIN_ZOOM, MAX_ZOOM].
    ///
    /// Es una aproximación, no la inversa exacta de la proyección de ningún SDK.
    /// Solo depende de `latitude_delta`.
    pub fn region_to_zoom(region: &Region) -> u8 {
        let span = region.latitude_delta.max(SPAN_EPSILON);
        let zoom = (360.0 / span).log2().round();
        zoom.clamp(MIN_ZOOM as f64, MAX_ZOOM as f64) as u8
    }

    pub fn region_to_center(region: &Region) -> LatLng {
        LatLng {
            lat: region.latitude,
            lng: region.longitude,
        }
    }

    /// Markers en orden de declaración; el resto de anotaciones se ignora
    pub fn extract_markers(annotations: &[MapAnnotation]) -> Vec<MarkerDescriptor> {
        annotations
            .iter()
            .filter_map(MapAnnotation::as_marker)
            .cloned()
            .collect()
    }

    pub fn project(region: &Region, annotations: &[MapAnnotation]) -> Viewport {
        Viewport {
            center: Self::region_to_center(region),
            zoom: Self::region_to_zoom(region),
            markers: Self::extract_markers(annotations),
        }
    }
}

/// Lo que la pantalla entrega a cualquier superficie de mapa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub region: Option<Region>,
    pub annotations: Vec<MapAnnotation>,
    pub shows_user_location: bool,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Región alrededor de la posición, o la de respaldo si aún no hay posición
    pub fn region_for(coordinate: Option<Coordinate>, config: &MapConfig) -> Region {
        match coordinate {
            Some(c) => Region::around(c, config.user_span),
            None => config.fallback_region(),
        }
    }

    /// Un único marker "You are here" cuando hay posición
    pub fn annotations_for(coordinate: Option<Coordinate>) -> Vec<MapAnnotation> {
        coordinate
            .map(|c| vec![MapAnnotation::marker(c, Some(USER_MARKER_TITLE))])
            .unwrap_or_default()
    }

    pub fn map_view(snapshot: &SessionSnapshot, config: &MapConfig) -> MapView {
        MapView {
            region: Some(Self::region_for(snapshot.coordinate, config)),
            annotations: Self::annotations_for(snapshot.coordinate),
            shows_user_location: snapshot.is_granted(),
        }
    }

    /// Texto de estado bajo el título ("lat, lng" con 5 decimales)
    pub fn coordinate_label(coordinate: &Coordinate) -> String {
        format!("{:.5}, {:.5}", coordinate.latitude, coordinate.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PermissionStatus;

    fn region_with_delta(latitude_delta: f64) -> Region {
        Region::new(0.0, 0.0, latitude_delta, latitude_delta)
    }

    #[test]
    fn test_zoom_stays_in_range() {
        let mut delta = 1e-9;
        while delta <= 360.0 {
            let zoom = ViewportProjector::region_to_zoom(&region_with_delta(delta));
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom), "delta {} -> zoom {}", delta, zoom);
            delta *= 3.0;
        }
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(360.0)), 1);
    }

    #[test]
    fn test_zoom_boundaries() {
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(360.0)), 1);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(0.000343)), 20);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(0.2)), 11);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(0.015)), 15);
    }

    #[test]
    fn test_degenerate_spans_use_floor() {
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(0.0)), MAX_ZOOM);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(-5.0)), MAX_ZOOM);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(f64::NAN)), MAX_ZOOM);
        assert_eq!(ViewportProjector::region_to_zoom(&region_with_delta(1000.0)), MIN_ZOOM);
    }

    #[test]
    fn test_zoom_depends_only_on_latitude_delta() {
        let base = Region::new(0.0, 0.0, 0.05, 0.05);
        let moved = Region::new(-33.8688, 151.2093, 0.05, 42.0);
        assert_eq!(
            ViewportProjector::region_to_zoom(&base),
            ViewportProjector::region_to_zoom(&moved)
        );
    }

    #[test]
    fn test_center_is_passthrough() {
        let region = Region::new(51.5074, -0.1278, 0.3, 0.4);
        assert_eq!(
            ViewportProjector::region_to_center(&region),
            LatLng { lat: 51.5074, lng: -0.1278 }
        );
    }

    #[test]
    fn test_extract_markers_keeps_declaration_order() {
        let annotations = vec![
            MapAnnotation::Label { text: "Parking".to_string() },
            MapAnnotation::marker(Coordinate::new(1.0, 1.0), Some("A")),
            MapAnnotation::Circle { center: Coordinate::new(0.0, 0.0), radius_m: 50.0 },
            MapAnnotation::marker(Coordinate::new(2.0, 2.0), None),
            MapAnnotation::marker(Coordinate::new(3.0, 3.0), Some("C")),
        ];

        let markers = ViewportProjector::extract_markers(&annotations);
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].title.as_deref(), Some("A"));
        assert_eq!(markers[1].coordinate, Coordinate::new(2.0, 2.0));
        assert_eq!(markers[1].title, None);
        assert_eq!(markers[2].title.as_deref(), Some("C"));

        assert_eq!(ViewportProjector::extract_markers(&annotations), markers);
    }

    #[test]
    fn test_extract_markers_empty() {
        assert!(ViewportProjector::extract_markers(&[]).is_empty());
    }

    #[test]
    fn test_fallback_region_projection() {
        let config = MapConfig::default();
        let region = MapViewModel::region_for(None, &config);
        assert_eq!(region, Region::new(37.7749, -122.4194, 0.2, 0.2));

        let viewport = ViewportProjector::project(&region, &MapViewModel::annotations_for(None));
        assert_eq!(viewport.zoom, ViewportProjector::region_to_zoom(&region_with_delta(0.2)));
        assert!(viewport.markers.is_empty());
    }

    #[test]
    fn test_map_view_with_fix() {
        let snapshot = SessionSnapshot {
            permission: Some(PermissionStatus::Granted),
            coordinate: Some(Coordinate::new(40.0, -3.0)),
            ..SessionSnapshot::default()
        };

        let view = MapViewModel::map_view(&snapshot, &MapConfig::default());
        assert_eq!(view.region, Some(Region::new(40.0, -3.0, 0.015, 0.015)));
        assert!(view.shows_user_location);

        let markers = ViewportProjector::extract_markers(&view.annotations);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title.as_deref(), Some(USER_MARKER_TITLE));
    }

    #[test]
    fn test_coordinate_label() {
        assert_eq!(
            MapViewModel::coordinate_label(&Coordinate::new(37.7749, -122.4194)),
            "37.77490, -122.41940"
        );
    }
}
