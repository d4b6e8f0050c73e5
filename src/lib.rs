// ============================================================================
// PARKING FINDER - Ubicación del usuario sobre el mapa (Rust + WASM)
// ============================================================================
// - Models: Coordenadas, permisos, regiones, anotaciones
// - Services: Proveedores de ubicación (contrato + navegador)
// - State: Estado de sesión con Rc<RefCell> + notificaciones
// - ViewModels: Sesión de ubicación + proyección región → viewport
// - Maps: Superficies de mapa por capacidad (nativa, JS, texto)
// ============================================================================

pub mod models;
pub mod config;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod maps;
pub mod utils;
pub mod app;

pub use app::App;
pub use config::AppConfig;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::AppConfig;
    use crate::maps::{self, MapCapability};
    use crate::services::BrowserGeolocationProvider;

    // Instancia global de la pantalla montada
    thread_local! {
        static APP: RefCell<Option<App<BrowserGeolocationProvider>>> = RefCell::new(None);
    }

    fn current_app() -> Option<App<BrowserGeolocationProvider>> {
        let app = APP.with(|cell| cell.borrow().clone());
        if app.is_none() {
            log::warn!("⚠️ App no está montada");
        }
        app
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = AppConfig::from_env();
        if config.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::default());
        }
        log::info!("🚀 Parking Finder - Rust + WASM");

        let capability = MapCapability::for_platform(&config.map_config);
        let surface = maps::surface_for(capability, &config.map_config)
            .or_else(|e| {
                log::warn!("⚠️ {} - usando mapa de texto", e);
                maps::surface_for(MapCapability::TextOnly, &config.map_config)
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let provider = BrowserGeolocationProvider::new(config.location_config.clone());
        let app = App::new(config, provider, surface);

        APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
        wasm_bindgen_futures::spawn_local(async move { app.mount().await });
        Ok(())
    }

    /// Botón "Enable Location"
    #[wasm_bindgen]
    pub fn enable_location() {
        if let Some(app) = current_app() {
            wasm_bindgen_futures::spawn_local(async move { app.enable_location().await });
        }
    }

    /// Botón "Refresh Location"
    #[wasm_bindgen]
    pub fn refresh_location() {
        if let Some(app) = current_app() {
            wasm_bindgen_futures::spawn_local(async move { app.refresh_location().await });
        }
    }

    /// Snapshot del estado en JSON para la capa de presentación
    #[wasm_bindgen]
    pub fn location_state_json() -> String {
        current_app()
            .and_then(|app| serde_json::to_string(&app.session().snapshot()).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Registrar un callback JS que se llama en cada cambio de estado
    #[wasm_bindgen]
    pub fn on_location_change(callback: js_sys::Function) {
        if let Some(app) = current_app() {
            app.session().state().subscribe(move || {
                let _ = callback.call0(&JsValue::NULL);
            });
        }
    }

    /// Desmontar: las operaciones en vuelo terminan sobre un estado que ya nadie observa
    #[wasm_bindgen]
    pub fn unmount() {
        APP.with(|cell| *cell.borrow_mut() = None);
        log::info!("🔌 App desmontada");
    }
}
