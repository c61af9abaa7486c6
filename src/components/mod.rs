pub mod helpers;
pub mod image_input;
pub mod palette_modal;
pub mod screen;
