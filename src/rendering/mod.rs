//! Presentation of a simulation: ANSI text for the terminal driver and
//! macroquad drawing for the viewer window.

pub mod terminal;
pub mod window;

pub use terminal::render;
