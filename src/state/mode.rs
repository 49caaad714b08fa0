/// Game mode definitions
///
/// The session switches between free browsing and the timed navigation puzzle.
use std::fmt;
use std::str::FromStr;

/// The two ways of playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Free-association browsing from a curated deck
    #[default]
    RabbitHole,

    /// Timed navigation from a start article to a target article
    Speedrun,
}

impl Mode {
    /// Returns the identifier used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RabbitHole => "rabbit-hole",
            Self::Speedrun => "speedrun",
        }
    }

    /// Human-readable label for the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Self::RabbitHole => "Rabbit Hole",
            Self::Speedrun => "Speedrun",
        }
    }

    /// Returns the other mode
    pub fn toggled(&self) -> Self {
        match self {
            Self::RabbitHole => Self::Speedrun,
            Self::Speedrun => Self::RabbitHole,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rabbit-hole" | "rabbithole" | "rabbit" => Ok(Self::RabbitHole),
            "speedrun" | "speed" => Ok(Self::Speedrun),
            other => Err(format!(
                "unknown mode '{}' (expected 'rabbit-hole' or 'speedrun')",
                other
            )),
        }
    }
}
