pub mod action;
pub mod command;
pub mod handler;
pub mod input;
pub mod keymap;
#[path = "loop.rs"]
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
