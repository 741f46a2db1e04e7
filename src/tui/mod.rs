pub mod app;
pub mod input;
pub mod keymap;
pub mod render;
pub mod text_input;
pub mod theme;
pub mod view_model;

pub use app::run;
