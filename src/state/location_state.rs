// ============================================================================
// LOCATION STATE - Estado de la sesión de ubicación
// ============================================================================
// Solo lo escriben las operaciones de LocationSession; la presentación lee
// snapshots y se suscribe a cambios
// ============================================================================

use serde::Serialize;

use super::ReactiveState;
use crate::models::{Coordinate, PermissionStatus};

/// Foto del estado en un instante
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub permission: Option<PermissionStatus>,
    pub coordinate: Option<Coordinate>,
    pub error: Option<String>,
    pub loading: bool,
    /// Momento (epoch ms) de la última posición válida
    pub last_fix_at: Option<i64>,
}

impl SessionSnapshot {
    pub fn is_granted(&self) -> bool {
        self.permission.is_some_and(PermissionStatus::is_granted)
    }
}

#[derive(Clone)]
pub struct LocationState {
    inner: ReactiveState<SessionSnapshot>,
}

impl LocationState {
    pub fn new() -> Self {
        Self {
            inner: ReactiveState::new(SessionSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.get()
    }

    pub fn get_loading(&self) -> bool {
        self.inner.with(|s| s.loading)
    }

    pub fn get_coordinate(&self) -> Option<Coordinate> {
        self.inner.with(|s| s.coordinate)
    }

    pub fn get_error(&self) -> Option<String> {
        self.inner.with(|s| s.error.clone())
    }

    pub fn get_permission(&self) -> Option<PermissionStatus> {
        self.inner.with(|s| s.permission)
    }

    /// Suscribirse a cada transición de la sesión
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.subscribe(callback);
    }

    /// Inicio de operación: loading on, error limpio
    pub(crate) fn begin(&self) {
        self.inner.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    pub(crate) fn set_permission(&self, status: PermissionStatus) {
        self.inner.update(|s| {
            s.permission = Some(status);
            if !status.is_granted() {
                s.coordinate = None;
            }
        });
    }

    pub(crate) fn set_fix(&self, coordinate: Coordinate, at_millis: i64) {
        self.inner.update(|s| {
            s.coordinate = Some(coordinate);
            s.last_fix_at = Some(at_millis);
        });
    }

    /// Error de proveedor; la coordenada anterior se conserva
    pub(crate) fn set_error(&self, message: String) {
        self.inner.update(|s| s.error = Some(message));
    }

    pub(crate) fn finish(&self) {
        self.inner.update(|s| s.loading = false);
    }
}

impl Default for LocationState {
    fn default() -> Self {
        Self::new()
    }
}
