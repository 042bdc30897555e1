//! RasterLab Application
//!
//! Runs JSON drawing scripts against a canvas and renders the result as text.

mod render;
mod script;

pub use render::render;
pub use script::{AppError, Operation, Script, load_script, run, run_file};
