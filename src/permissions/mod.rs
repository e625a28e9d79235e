// Public API
pub use errors::{PermissionError, ProtectedAction};
pub use gate::{
    can_manage_formula, can_record_result, require_formula_manager, require_game_author,
};

// Internal modules
mod errors;
mod gate;
