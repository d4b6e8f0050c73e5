// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod location_state;

pub use reactivity::*;
pub use location_state::*;
