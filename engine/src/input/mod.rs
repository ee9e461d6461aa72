//! Input Module
//!
//! Logical action state for the simulation, decoupled from any
//! windowing system. The platform backend polls real devices and
//! reports the five logical actions the game understands; the player
//! samples that state exactly once at the start of its update.

/// Held-state of the logical actions, sampled once per frame.
///
/// Plain booleans rather than events: the simulation reads what is
/// currently held, and cooldowns (not key-repeat suppression) gate the
/// fire actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    /// Walk left
    pub move_left: bool,
    /// Walk right
    pub move_right: bool,
    /// Jump (only takes effect while grounded)
    pub jump: bool,
    /// Fire the gun
    pub shoot: bool,
    /// Lob a grenade
    pub throw_grenade: bool,
}

impl ActionState {
    /// Create a state with every action released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal movement direction: -1 (left), 0, or +1 (right).
    ///
    /// Right wins when both directions are held, matching the original
    /// key-priority order.
    pub fn horizontal_axis(&self) -> i32 {
        if self.move_right {
            1
        } else if self.move_left {
            -1
        } else {
            0
        }
    }

    /// Check if any action is currently held.
    pub fn any_held(&self) -> bool {
        self.move_left || self.move_right || self.jump || self.shoot || self.throw_grenade
    }
}

/// Source of the per-frame action snapshot.
///
/// The real implementation wraps the platform's key polling; tests and
/// the headless binary use [`ScriptedInput`].
pub trait InputSource {
    /// Current held-state of all logical actions.
    fn actions(&self) -> ActionState;
}

impl InputSource for ActionState {
    fn actions(&self) -> ActionState {
        *self
    }
}

/// Scripted input source replaying a fixed sequence of action states.
///
/// Each call to [`ScriptedInput::advance`] moves to the next scripted
/// frame; once the script is exhausted the last state (or the released
/// state for an empty script) is held forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<ActionState>,
    cursor: usize,
}

impl ScriptedInput {
    /// Create a script from a list of per-frame states.
    pub fn new(frames: Vec<ActionState>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Script that holds one state for a number of frames.
    pub fn held(state: ActionState, frames: usize) -> Self {
        Self::new(vec![state; frames])
    }

    /// Move to the next scripted frame.
    pub fn advance(&mut self) {
        if self.cursor < self.frames.len() {
            self.cursor += 1;
        }
    }

    /// Whether the script has been fully consumed.
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn actions(&self) -> ActionState {
        self.frames
            .get(self.cursor)
            .or_else(|| self.frames.last())
            .copied()
            .unwrap_or_default()
    }
}
