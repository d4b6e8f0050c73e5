use serde::{Deserialize, Serialize};

use crate::models::{AccuracyTier, Region};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub location_config: LocationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            map_config: MapConfig::default(),
            location_config: LocationConfig::default(),
        }
    }
}

/// Parámetros del mapa. La API key se inyecta aquí, nunca se lee del entorno en el proyector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub fallback_lat: f64,
    pub fallback_lng: f64,
    pub fallback_span: f64,
    pub user_span: f64,
    pub api_key: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_lat: 37.7749, // San Francisco
            fallback_lng: -122.4194,
            fallback_span: 0.2,
            user_span: 0.015,
            api_key: None,
        }
    }
}

impl MapConfig {
    /// Región mostrada antes de tener permiso / una posición
    pub fn fallback_region(&self) -> Region {
        Region::new(
            self.fallback_lat,
            self.fallback_lng,
            self.fallback_span,
            self.fallback_span,
        )
    }

    /// API key utilizable (vacía cuenta como ausente)
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub accuracy: AccuracyTier,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            accuracy: AccuracyTier::Balanced,
            timeout_ms: 15_000,
            maximum_age_ms: 0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            map_config: MapConfig {
                fallback_lat: option_env!("FALLBACK_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.fallback_lat),
                fallback_lng: option_env!("FALLBACK_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.fallback_lng),
                fallback_span: option_env!("FALLBACK_SPAN")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.fallback_span),
                user_span: option_env!("USER_SPAN")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.user_span),
                api_key: option_env!("MAPS_API_KEY").map(|s| s.to_string()),
            },
            location_config: LocationConfig {
                accuracy: option_env!("LOCATION_ACCURACY")
                    .map(AccuracyTier::parse)
                    .unwrap_or(defaults.location_config.accuracy),
                timeout_ms: option_env!("LOCATION_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.location_config.timeout_ms),
                maximum_age_ms: option_env!("LOCATION_MAXIMUM_AGE_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.location_config.maximum_age_ms),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback_region() {
        let region = MapConfig::default().fallback_region();
        assert_eq!(region, Region::new(37.7749, -122.4194, 0.2, 0.2));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let mut config = MapConfig::default();
        assert_eq!(config.api_key(), None);

        config.api_key = Some("   ".to_string());
        assert_eq!(config.api_key(), None);

        config.api_key = Some("abc123".to_string());
        assert_eq!(config.api_key(), Some("abc123"));
    }
}
