// ============================================================================
// LOCATION PROVIDER - Contrato con el servicio de ubicación de la plataforma
// ============================================================================
// SOLO comunicación con la plataforma - Sin estado de sesión
// ============================================================================

use thiserror::Error;

use crate::models::{AccuracyTier, Coordinate, PermissionStatus};

/// Fallo del proveedor. El `Display` es el mensaje que ve el usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("Location services unavailable: {0}")]
    Unavailable(String),
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location request timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Proveedor de ubicación inyectado en la sesión.
///
/// Las tres llamadas pueden suspender; `request_permission` puede quedarse
/// esperando al usuario indefinidamente.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Consultar el permiso actual sin mostrar ningún diálogo
    async fn permission_status(&self) -> Result<PermissionStatus, ProviderError>;

    /// Pedir permiso al usuario (diálogo del sistema)
    async fn request_permission(&self) -> Result<PermissionStatus, ProviderError>;

    /// Obtener una única posición con el nivel de precisión indicado
    async fn current_position(&self, accuracy: AccuracyTier) -> Result<Coordinate, ProviderError>;
}
