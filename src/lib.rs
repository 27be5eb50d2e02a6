// A window that shows an off-screen pixel buffer, redrawn every frame:
// a fixed red square in the corner and a green one bouncing under gravity.
// Pass a third argument to also draw the diagnostic vector overlay.

pub mod app;
pub mod buffer;
pub mod config;
pub mod draw;
pub mod error;
pub mod frame_rate;
pub mod physics;
pub mod render;
pub mod ticks;
pub mod types;
pub mod window;

pub use app::{App, LoopState};
pub use config::Config;
pub use error::Error;
