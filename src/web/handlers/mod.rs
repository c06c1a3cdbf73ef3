//! API handlers for the soundboard.

pub mod pages;
pub mod sounds;
pub mod state;
pub mod upload;

pub use pages::*;
pub use sounds::*;
pub use state::AppState;
pub use upload::*;
