// ============================================================================
// APP - Composición: configuración + sesión de ubicación + superficie de mapa
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::maps::{MapError, MapSurface};
use crate::services::LocationProvider;
use crate::viewmodels::{LocationAction, LocationSession, MapView, MapViewModel};

pub struct App<P: LocationProvider> {
    config: Rc<AppConfig>,
    session: LocationSession<P>,
    surface: Rc<RefCell<Box<dyn MapSurface>>>,
}

impl<P: LocationProvider> Clone for App<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            surface: self.surface.clone(),
        }
    }
}

impl<P: LocationProvider> App<P> {
    pub fn new(config: AppConfig, provider: P, surface: Box<dyn MapSurface>) -> Self {
        let accuracy = config.location_config.accuracy;
        Self {
            config: Rc::new(config),
            session: LocationSession::new(provider, accuracy),
            surface: Rc::new(RefCell::new(surface)),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &LocationSession<P> {
        &self.session
    }

    pub fn map_view(&self) -> MapView {
        MapViewModel::map_view(&self.session.snapshot(), &self.config.map_config)
    }

    pub fn primary_action(&self) -> LocationAction {
        LocationAction::for_snapshot(&self.session.snapshot())
    }

    /// Pintar el estado actual en la superficie
    pub fn render(&self) -> Result<(), MapError> {
        let view = self.map_view();
        self.surface.borrow_mut().render(&view)
    }

    /// Montaje: pintar la región de respaldo, consultar permiso y repintar
    pub async fn mount(&self) {
        self.render_logged();
        self.session.query_and_fetch().await;
        self.render_logged();
    }

    /// Botón "Enable Location"
    pub async fn enable_location(&self) {
        self.session.request_permission_and_fetch().await;
        self.render_logged();
    }

    /// Botón "Refresh Location"
    pub async fn refresh_location(&self) {
        self.session.query_and_fetch().await;
        self.render_logged();
    }

    /// Ejecutar la acción que muestra la pantalla; ignorada mientras hay una en vuelo
    pub async fn run_primary_action(&self) {
        let snapshot = self.session.snapshot();
        if !LocationAction::is_enabled(&snapshot) {
            log::warn!("⚠️ Operación de ubicación en curso, acción ignorada");
            return;
        }

        match LocationAction::for_snapshot(&snapshot) {
            LocationAction::EnableLocation => self.enable_location().await,
            LocationAction::RefreshLocation => self.refresh_location().await,
        }
    }

    fn render_logged(&self) {
        if let Err(e) = self.render() {
            log::error!("❌ Error pintando el mapa: {}", e);
        }
    }
}
