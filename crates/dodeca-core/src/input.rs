//! Platform-neutral key and scroll state, snapshotted once per frame.

/// Everything a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    RotateXPos,
    RotateXNeg,
    RotateYPos,
    RotateYNeg,
    RotateZPos,
    RotateZNeg,
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
    ToggleOrthogonal,
    ToggleTriangles,
    Quit,
}

impl Action {
    pub const COUNT: usize = 17;

    pub const ALL: [Action; Action::COUNT] = [
        Action::RotateXPos,
        Action::RotateXNeg,
        Action::RotateYPos,
        Action::RotateYNeg,
        Action::RotateZPos,
        Action::RotateZNeg,
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::LookUp,
        Action::LookDown,
        Action::LookLeft,
        Action::LookRight,
        Action::ToggleOrthogonal,
        Action::ToggleTriangles,
        Action::Quit,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Immutable view of the input for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    held: [bool; Action::COUNT],
    pressed: [bool; Action::COUNT],
    /// Vertical scroll in line units accumulated since the previous frame.
    pub scroll_delta: f32,
}

impl InputSnapshot {
    #[inline]
    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    #[inline]
    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }
}

/// Accumulates key and scroll events between frames.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    held: [bool; Action::COUNT],
    pressed: [bool; Action::COUNT],
    scroll_delta: f32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. An echoed event (OS auto-repeat, or a
    /// synthetic press replayed on focus gain) marks the key held but never
    /// counts as a new press.
    pub fn key(&mut self, action: Action, down: bool, echo: bool) {
        let i = action.index();
        if down {
            if !self.held[i] && !echo {
                self.pressed[i] = true;
            }
            self.held[i] = true;
        } else {
            self.held[i] = false;
        }
    }

    pub fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    /// Drop all held keys, e.g. when the window loses focus and the release
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.held = [false; Action::COUNT];
    }

    /// Take the state for this frame and reset the per-frame parts.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            held: self.held,
            pressed: self.pressed,
            scroll_delta: self.scroll_delta,
        };
        self.pressed = [false; Action::COUNT];
        self.scroll_delta = 0.0;
        snap
    }
}
