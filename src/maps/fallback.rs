use super::{MapCapability, MapError, MapSurface};
use crate::viewmodels::{MapView, MapViewModel};

pub const UNAVAILABLE_TITLE: &str = "Map is not available in the web build yet.";
pub const NO_CENTER_HINT: &str = "Open the native app to see the interactive map.";

/// Superficie de texto para builds sin mapa
#[derive(Debug, Default)]
pub struct TextMapSurface {
    lines: Vec<String>,
}

impl TextMapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl MapSurface for TextMapSurface {
    fn capability(&self) -> MapCapability {
        MapCapability::TextOnly
    }

    fn render(&mut self, view: &MapView) -> Result<(), MapError> {
        let detail = match view.region {
            Some(region) => format!(
                "Center: {}",
                MapViewModel::coordinate_label(&region.center())
            ),
            None => NO_CENTER_HINT.to_string(),
        };

        self.lines = vec![UNAVAILABLE_TITLE.to_string(), detail];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;

    #[test]
    fn test_text_with_center() {
        let mut surface = TextMapSurface::new();
        let view = MapView {
            region: Some(Region::new(37.7749, -122.4194, 0.2, 0.2)),
            annotations: Vec::new(),
            shows_user_location: false,
        };

        surface.render(&view).unwrap();
        assert_eq!(
            surface.text(),
            "Map is not available in the web build yet.\nCenter: 37.77490, -122.41940"
        );
    }

    #[test]
    fn test_text_without_center() {
        let mut surface = TextMapSurface::new();
        let view = MapView {
            region: None,
            annotations: Vec::new(),
            shows_user_location: false,
        };

        surface.render(&view).unwrap();
        assert_eq!(surface.lines()[1], NO_CENTER_HINT);
    }
}
