//! Swipe directions and drag gesture interpretation
//!
//! A drag on the card header moves the card with the pointer. Releasing it far
//! enough to either side commits a swipe; anything shorter snaps back.

/// Horizontal distance a drag must exceed to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 180.0;

/// Maximum horizontal card offset while dragging
pub const MAX_OFFSET_X: f32 = 320.0;

/// Maximum vertical card offset while dragging
pub const MAX_OFFSET_Y: f32 = 80.0;

/// Vertical movement is damped by this factor
const VERTICAL_DAMPING: f32 = 0.08;

/// Horizontal pixels per degree of card rotation
const ROTATION_DIVISOR: f32 = 25.0;

/// Maximum card rotation in degrees
const MAX_ROTATION: f32 = 12.0;

/// Extra distance a committed card travels past the threshold
const FLING_OVERSHOOT: f32 = 40.0;

/// Direction of a committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Skip (rabbit hole) or preview the next candidate (speedrun)
    Left,

    /// Follow a link (rabbit hole) or accept the candidate (speedrun)
    Right,
}

impl SwipeDirection {
    /// Maps a key name to a swipe direction
    ///
    /// `a`, `h`, and `left` swipe left; `d`, `l`, and `right` swipe right.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "a" | "h" | "left" => Some(Self::Left),
            "d" | "l" | "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// What a swipe did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The mode is locked (finished speedrun); nothing changed and no step counts
    Ignored,

    /// Accepted, but the card stays on the same article
    Stayed,

    /// Moved to another article or candidate
    Moved,

    /// Accepted the speedrun target
    Finished,
}

/// Visual displacement of the card
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardOffset {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl CardOffset {
    fn from_drag(dx: f32, dy: f32) -> Self {
        let x = dx.clamp(-MAX_OFFSET_X, MAX_OFFSET_X);
        let y = (dy * VERTICAL_DAMPING).clamp(-MAX_OFFSET_Y, MAX_OFFSET_Y);
        Self {
            x,
            y,
            rotation: (x / ROTATION_DIVISOR).clamp(-MAX_ROTATION, MAX_ROTATION),
        }
    }

    /// Offset of a card flung off screen by a committed swipe
    pub fn fling(direction: SwipeDirection) -> Self {
        let x = match direction {
            SwipeDirection::Right => SWIPE_THRESHOLD + FLING_OVERSHOOT,
            SwipeDirection::Left => -(SWIPE_THRESHOLD + FLING_OVERSHOOT),
        };
        Self {
            x,
            y: 0.0,
            rotation: (x / ROTATION_DIVISOR).clamp(-MAX_ROTATION, MAX_ROTATION),
        }
    }
}

/// Pointer drag state of a card
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    origin: Option<(f32, f32)>,
    offset: CardOffset,
    locked: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks or unlocks the gesture; a locked card ignores all input
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        if locked {
            self.cancel();
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn offset(&self) -> CardOffset {
        self.offset
    }

    /// Starts a drag at pointer position `(x, y)`
    pub fn begin(&mut self, x: f32, y: f32) {
        if self.locked {
            return;
        }
        self.origin = Some((x, y));
        self.offset = CardOffset::default();
    }

    /// Moves the pointer and returns the new card offset
    pub fn update(&mut self, x: f32, y: f32) -> CardOffset {
        if self.locked {
            return self.offset;
        }
        if let Some((ox, oy)) = self.origin {
            self.offset = CardOffset::from_drag(x - ox, y - oy);
        }
        self.offset
    }

    /// Ends the drag at `(x, _)` and returns the committed swipe, if any
    ///
    /// The decision uses the raw horizontal distance, not the clamped offset.
    pub fn release(&mut self, x: f32) -> Option<SwipeDirection> {
        if self.locked {
            return None;
        }
        let (ox, _) = self.origin.take()?;
        let dx = x - ox;

        let direction = if dx > SWIPE_THRESHOLD {
            Some(SwipeDirection::Right)
        } else if dx < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Left)
        } else {
            None
        };

        self.offset = CardOffset::default();
        direction
    }

    /// Aborts the drag and snaps the card back
    pub fn cancel(&mut self) {
        self.origin = None;
        self.offset = CardOffset::default();
    }
}
