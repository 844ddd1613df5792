mod ai;
mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod render;
mod session;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use render::*;
pub use session::*;
pub use ship::*;
