/// Constants and command-line arguments for the explorer.
pub mod config;
/// Rendering of boards and move tables to the terminal.
pub mod display;
/// The interactive prompt, which reads a piece and a square and shows where that piece can go.
pub mod explorer;

pub use explorer::*;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::display::*;
    pub use crate::explorer::*;
}
