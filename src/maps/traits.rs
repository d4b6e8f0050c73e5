use thiserror::Error;

use crate::viewmodels::MapView;

/// Qué sabe pintar una superficie de mapa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCapability {
    /// Control nativo que acepta región (centro + span)
    NativeRegion,
    /// API JS que solo acepta centro + zoom
    CenterZoom,
    /// Sin mapa: solo texto
    TextOnly,
}

/// Trait común para las superficies de mapa de todas las plataformas
pub trait MapSurface {
    fn capability(&self) -> MapCapability;

    /// Pintar la vista actual (región, anotaciones, punto del usuario)
    fn render(&mut self, view: &MapView) -> Result<(), MapError>;

    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool {
        true
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,
    #[error("Map API key is not configured")]
    MissingApiKey,
    #[error("Map view has no region to show")]
    MissingRegion,
    #[error("Render error: {0}")]
    Render(String),
}
