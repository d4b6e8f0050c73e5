use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Punto de interés declarado sobre el mapa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MarkerDescriptor {
    pub fn new(coordinate: Coordinate, title: Option<&str>) -> Self {
        Self {
            coordinate,
            title: title.map(str::to_string),
        }
    }
}

/// Anotaciones hijas de una vista de mapa, en orden de declaración.
/// Solo `Marker` llega a las superficies que no saben pintar el resto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapAnnotation {
    Marker(MarkerDescriptor),
    Label { text: String },
    Circle { center: Coordinate, radius_m: f64 },
}

impl MapAnnotation {
    pub fn marker(coordinate: Coordinate, title: Option<&str>) -> Self {
        MapAnnotation::Marker(MarkerDescriptor::new(coordinate, title))
    }

    pub fn as_marker(&self) -> Option<&MarkerDescriptor> {
        match self {
            MapAnnotation::Marker(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}
