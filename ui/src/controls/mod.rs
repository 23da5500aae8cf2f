mod toggles;
pub use toggles::{switcher_buttons, AttributeToggles, ToggleButton};
