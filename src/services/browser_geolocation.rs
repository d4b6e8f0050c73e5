// ============================================================================
// BROWSER GEOLOCATION - Proveedor de ubicación para la build web (WASM)
// ============================================================================
// Permissions API para consultar sin diálogo, Geolocation API para pedir
// permiso y leer la posición
// ============================================================================

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Geolocation, PositionOptions};

use super::{LocationProvider, ProviderError};
use crate::config::LocationConfig;
use crate::models::{AccuracyTier, Coordinate, PermissionStatus};

// Códigos de GeolocationPositionError
const PERMISSION_DENIED: f64 = 1.0;
const POSITION_UNAVAILABLE: f64 = 2.0;
const TIMEOUT: f64 = 3.0;

pub struct BrowserGeolocationProvider {
    config: LocationConfig,
}

impl BrowserGeolocationProvider {
    pub fn new(config: LocationConfig) -> Self {
        Self { config }
    }

    fn geolocation() -> Result<Geolocation, ProviderError> {
        let window = web_sys::window()
            .ok_or_else(|| ProviderError::Unavailable("no window object".to_string()))?;

        window
            .navigator()
            .geolocation()
            .map_err(|_| ProviderError::Unavailable("Geolocation API not supported".to_string()))
    }

    fn position_options(&self, accuracy: AccuracyTier) -> PositionOptions {
        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("enableHighAccuracy"),
            &JsValue::from_bool(accuracy.wants_high_accuracy()),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("timeout"),
            &JsValue::from_f64(self.config.timeout_ms as f64),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("maximumAge"),
            &JsValue::from_f64(self.config.maximum_age_ms as f64),
        );
        options.unchecked_into::<PositionOptions>()
    }

    /// getCurrentPosition envuelto en una Promise: resolve/reject son los callbacks
    async fn locate(&self, accuracy: AccuracyTier) -> Result<JsValue, ProviderError> {
        let geolocation = Self::geolocation()?;
        let options = self.position_options(accuracy);

        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
                &resolve,
                Some(&reject),
                &options,
            ) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        JsFuture::from(promise)
            .await
            .map_err(|err| Self::map_position_error(&err))
    }

    fn map_position_error(err: &JsValue) -> ProviderError {
        let code = Reflect::get(err, &JsValue::from_str("code"))
            .ok()
            .and_then(|v| v.as_f64());
        let message = Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Failed to read location".to_string());

        match code {
            Some(c) if c == PERMISSION_DENIED => ProviderError::PermissionDenied,
            Some(c) if c == POSITION_UNAVAILABLE => ProviderError::Unavailable(message),
            Some(c) if c == TIMEOUT => ProviderError::Timeout,
            _ => ProviderError::Other(message),
        }
    }

    fn read_coordinate(position: &JsValue) -> Result<Coordinate, ProviderError> {
        let coords = Reflect::get(position, &JsValue::from_str("coords"))
            .map_err(|_| ProviderError::Other("Position without coords".to_string()))?;

        let field = |name: &str| {
            Reflect::get(&coords, &JsValue::from_str(name))
                .ok()
                .and_then(|v| v.as_f64())
                .ok_or_else(|| ProviderError::Other(format!("Position without {}", name)))
        };

        Ok(Coordinate::new(field("latitude")?, field("longitude")?))
    }
}

impl LocationProvider for BrowserGeolocationProvider {
    async fn permission_status(&self) -> Result<PermissionStatus, ProviderError> {
        let window = web_sys::window()
            .ok_or_else(|| ProviderError::Unavailable("no window object".to_string()))?;
        let navigator = window.navigator();

        // Safari antiguo no tiene Permissions API: sin dato, el permiso queda por determinar
        let permissions = match Reflect::get(&navigator, &JsValue::from_str("permissions")) {
            Ok(p) if !p.is_undefined() && !p.is_null() => p,
            _ => {
                log::warn!("⚠️ Permissions API no disponible, permiso sin determinar");
                return Ok(PermissionStatus::Undetermined);
            }
        };

        let query = Reflect::get(&permissions, &JsValue::from_str("query"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ProviderError::Unavailable("permissions.query missing".to_string()))?;

        let descriptor = Object::new();
        let _ = Reflect::set(
            &descriptor,
            &JsValue::from_str("name"),
            &JsValue::from_str("geolocation"),
        );

        let promise = query
            .call1(&permissions, &descriptor)
            .ok()
            .and_then(|p| p.dyn_into::<Promise>().ok())
            .ok_or_else(|| ProviderError::Other("permissions.query failed".to_string()))?;

        let status = JsFuture::from(promise)
            .await
            .map_err(|_| ProviderError::Other("Failed to read location permission".to_string()))?;

        let state = Reflect::get(&status, &JsValue::from_str("state"))
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_default();

        Ok(PermissionStatus::from_browser_state(&state))
    }

    async fn request_permission(&self) -> Result<PermissionStatus, ProviderError> {
        // El navegador solo muestra el diálogo al pedir una posición
        match self.locate(self.config.accuracy).await {
            Ok(_) => Ok(PermissionStatus::Granted),
            Err(ProviderError::PermissionDenied) => Ok(PermissionStatus::Denied),
            Err(other) => match self.permission_status().await {
                Ok(PermissionStatus::Granted) => Ok(PermissionStatus::Granted),
                _ => Err(other),
            },
        }
    }

    async fn current_position(&self, accuracy: AccuracyTier) -> Result<Coordinate, ProviderError> {
        let position = self.locate(accuracy).await?;
        Self::read_coordinate(&position)
    }
}
