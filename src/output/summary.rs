//! Finished speedrun results and output errors

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Result of a finished speedrun
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub start: String,
    pub target: String,

    /// Time from the start of the run to accepting the target
    pub elapsed: Duration,

    /// Total swipes, left and right
    pub steps: u32,
    pub right_swipes: u32,
    pub left_swipes: u32,

    /// Articles stood on, from start to target
    pub path: Vec<String>,
}

impl RunSummary {
    /// Number of links followed (path length minus the start article)
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// The finish overlay shown when the target is reached
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finished!")?;
        writeln!(f, "You reached {}.", self.target)?;
        writeln!(f, "Time: {:.2}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Total Steps: {}", self.steps)?;
        write!(
            f,
            "Right Swipes: {} · Left Swipes: {}",
            self.right_swipes, self.left_swipes
        )
    }
}
