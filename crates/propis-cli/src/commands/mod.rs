//! CLI command implementations.

mod registers;
mod render;

pub use registers::{RegistersArgs, run_registers};
pub use render::{RenderArgs, run_render};
