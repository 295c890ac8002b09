pub mod constants;
pub mod layout;
pub mod palette;
pub mod render;
