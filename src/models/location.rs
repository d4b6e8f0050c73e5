// ============================================================================
// LOCATION MODELS - Permiso, coordenadas y nivel de precisión
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado del permiso de ubicación tal como lo reporta el proveedor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Undetermined,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }

    /// Parsear el `state` del Permissions API del navegador ("granted" | "denied" | "prompt")
    pub fn from_browser_state(state: &str) -> Self {
        match state {
            "granted" => PermissionStatus::Granted,
            "denied" => PermissionStatus::Denied,
            _ => PermissionStatus::Undetermined,
        }
    }
}

impl std::fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionStatus::Undetermined => write!(f, "undetermined"),
            PermissionStatus::Granted => write!(f, "granted"),
            PermissionStatus::Denied => write!(f, "denied"),
        }
    }
}

/// Coordenadas geográficas (grados)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Compromiso precisión/consumo pedido al proveedor de ubicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyTier {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
    BestForNavigation,
}

impl AccuracyTier {
    /// El navegador solo distingue entre precisión alta o no
    pub fn wants_high_accuracy(self) -> bool {
        matches!(
            self,
            AccuracyTier::High | AccuracyTier::Highest | AccuracyTier::BestForNavigation
        )
    }

    /// Parsear desde configuración; valores desconocidos vuelven a `Balanced`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lowest" => AccuracyTier::Lowest,
            "low" => AccuracyTier::Low,
            "high" => AccuracyTier::High,
            "highest" => AccuracyTier::Highest,
            "best_for_navigation" | "navigation" => AccuracyTier::BestForNavigation,
            _ => AccuracyTier::Balanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_permission_states() {
        assert_eq!(PermissionStatus::from_browser_state("granted"), PermissionStatus::Granted);
        assert_eq!(PermissionStatus::from_browser_state("denied"), PermissionStatus::Denied);
        assert_eq!(PermissionStatus::from_browser_state("prompt"), PermissionStatus::Undetermined);
    }

    #[test]
    fn test_accuracy_tier_parse() {
        assert_eq!(AccuracyTier::parse("HIGH"), AccuracyTier::High);
        assert_eq!(AccuracyTier::parse("navigation"), AccuracyTier::BestForNavigation);
        assert_eq!(AccuracyTier::parse("whatever"), AccuracyTier::Balanced);
        assert!(!AccuracyTier::default().wants_high_accuracy());
        assert!(AccuracyTier::Highest.wants_high_accuracy());
    }
}
