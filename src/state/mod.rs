//! Swipe state machines for both game modes
//!
//! # Components
//!
//! - `Mode`: rabbit hole or speedrun
//! - `SwipeDirection`, `DragGesture`: turning input into swipes
//! - `RabbitHole`: deck skipping and liked-link browsing
//! - `Speedrun`: candidate previewing, acceptance, and the run clock
//! - `Session`: the active mode, the shared step counter, and stale-result guards

mod mode;
mod rabbit_hole;
mod session;
mod speedrun;
mod swipe;

// Re-export main types
pub use mode::Mode;
pub use rabbit_hole::RabbitHole;
pub use session::Session;
pub use speedrun::{Speedrun, SpeedrunView};
pub use swipe::{
    CardOffset, DragGesture, SwipeDirection, SwipeOutcome, MAX_OFFSET_X, MAX_OFFSET_Y,
    SWIPE_THRESHOLD,
};
