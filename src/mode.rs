use serde::{Deserialize, Serialize};

/// Keybinding context. `Browse` covers every section of the site; `Booking`
/// is entered while the booking form has keyboard focus, so that typing
/// reaches the form fields instead of the navigation keymap.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Browse,
    Booking,
}
