pub mod engine;
pub mod game;
pub mod input;
pub mod renderer;  // Rendering trait
pub mod terminal;  // Terminal context wrapper
