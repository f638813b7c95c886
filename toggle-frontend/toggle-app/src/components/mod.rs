pub mod slide_toggle;
pub mod toast;
