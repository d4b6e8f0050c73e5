// ============================================================================
// MAPS FFI - Foreign Function Interface para la API JS de mapas
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    pub fn init_map(container_id: &str, api_key: &str);

    #[wasm_bindgen(js_name = setMapViewport)]
    pub fn set_map_viewport(lat: f64, lng: f64, zoom: u8);

    #[wasm_bindgen(js_name = setMapMarkers)]
    pub fn set_map_markers(markers_json: &str);
}
