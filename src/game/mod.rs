//! Playing a generated puzzle

mod input;
mod render;
mod session;
mod state;

pub use input::SwapSession;
pub use render::{BoardCell, BoardView, LatestBoard, RenderError, RenderSink};
pub use session::Game;
pub use state::{Outcome, PuzzleState, SwapReport};
