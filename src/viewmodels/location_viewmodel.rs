// ============================================================================
// LOCATION VIEWMODEL - Ciclo de permiso + obtención de posición
// ============================================================================
// Las operaciones nunca devuelven error: todo fallo del proveedor acaba en
// el estado (campo `error`) y `loading` vuelve a false al final
// ============================================================================

use std::rc::Rc;

use crate::models::{AccuracyTier, PermissionStatus};
use crate::services::LocationProvider;
use crate::state::{LocationState, SessionSnapshot};

/// Sesión de ubicación de una pantalla.
///
/// No encola ni cancela: quien llama no debe solapar dos operaciones sobre
/// la misma sesión. Si la pantalla desaparece con una operación en vuelo,
/// el resultado se escribe en un estado que ya nadie observa.
pub struct LocationSession<P: LocationProvider> {
    provider: Rc<P>,
    state: LocationState,
    accuracy: AccuracyTier,
}

impl<P: LocationProvider> Clone for LocationSession<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            state: self.state.clone(),
            accuracy: self.accuracy,
        }
    }
}

impl<P: LocationProvider> LocationSession<P> {
    pub fn new(provider: P, accuracy: AccuracyTier) -> Self {
        Self::with_shared_provider(Rc::new(provider), accuracy)
    }

    pub fn with_shared_provider(provider: Rc<P>, accuracy: AccuracyTier) -> Self {
        Self {
            provider,
            state: LocationState::new(),
            accuracy,
        }
    }

    /// Estado observable (solo lectura + suscripción)
    pub fn state(&self) -> &LocationState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Consultar permiso (sin diálogo) y, si está concedido, leer la posición.
    /// Se llama al montar la pantalla y en "Refresh Location".
    pub async fn query_and_fetch(&self) {
        log::info!("📍 Consultando permiso de ubicación...");
        self.state.begin();

        match self.provider.permission_status().await {
            Ok(status) => self.store_status_and_fetch(status).await,
            Err(e) => {
                log::error!("❌ Error consultando permiso: {}", e);
                self.state.set_error(e.to_string());
            }
        }

        self.state.finish();
    }

    /// Mostrar el diálogo de permiso y, si se concede, leer la posición.
    /// Puede quedarse suspendida mientras el usuario no responde.
    pub async fn request_permission_and_fetch(&self) {
        log::info!("🔐 Pidiendo permiso de ubicación al usuario...");
        self.state.begin();

        match self.provider.request_permission().await {
            Ok(status) => self.store_status_and_fetch(status).await,
            Err(e) => {
                log::error!("❌ Error pidiendo permiso: {}", e);
                self.state.set_error(e.to_string());
            }
        }

        self.state.finish();
    }

    /// El permiso se guarda siempre antes de intentar la lectura
    async fn store_status_and_fetch(&self, status: PermissionStatus) {
        self.state.set_permission(status);

        if !status.is_granted() {
            log::info!("🚫 Permiso de ubicación: {}", status);
            return;
        }

        self.fetch_and_store().await;
    }

    /// Un fallo no borra la coordenada anterior (se sigue mostrando la última conocida)
    async fn fetch_and_store(&self) {
        match self.provider.current_position(self.accuracy).await {
            Ok(coordinate) => {
                log::info!(
                    "✅ Posición obtenida: ({:.5}, {:.5})",
                    coordinate.latitude,
                    coordinate.longitude
                );
                self.state
                    .set_fix(coordinate, chrono::Utc::now().timestamp_millis());
            }
            Err(e) => {
                log::warn!("⚠️ No se pudo leer la posición: {}", e);
                self.state.set_error(e.to_string());
            }
        }
    }
}

/// Acción principal que ofrece la pantalla según el estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationAction {
    EnableLocation,
    RefreshLocation,
}

impl LocationAction {
    pub fn for_snapshot(snapshot: &SessionSnapshot) -> Self {
        if snapshot.is_granted() {
            LocationAction::RefreshLocation
        } else {
            LocationAction::EnableLocation
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationAction::EnableLocation => "Enable Location",
            LocationAction::RefreshLocation => "Refresh Location",
        }
    }

    /// Deshabilitada mientras hay una operación en vuelo
    pub fn is_enabled(snapshot: &SessionSnapshot) -> bool {
        !snapshot.loading
    }
}
