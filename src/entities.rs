/// All game entity types — pure data, no logic.

use std::collections::VecDeque;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Anything with an axis-aligned bounding box in board coordinates.
pub trait Rect {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

/// The logical drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Board {
    pub width: f64,
    pub height: f64,
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    /// Fixed for the whole session.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect for Bird {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}

// ── Pipes ─────────────────────────────────────────────────────────────────────

/// Which sprite a pipe is drawn with.  Top pipes hang from above the
/// board, bottom pipes rise from below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeSprite {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub sprite: PipeSprite,
    /// Set once the bird's leading edge has cleared this pipe.
    pub passed: bool,
}

impl Rect for Pipe {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}

// ── Sound cues ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Flap,
    /// Loaded with the others but never queued by the simulation.
    Point,
    Hit,
    Die,
}

impl Sound {
    pub const ALL: [Sound; 4] = [Sound::Flap, Sound::Point, Sound::Hit, Sound::Die];

    /// Clip file name inside the sound directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Flap => "sfx_wing.wav",
            Sound::Point => "sfx_point.wav",
            Sound::Hit => "sfx_hit.wav",
            Sound::Die => "sfx_die.wav",
        }
    }
}

// ── Game flow ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Crashed; the die cue and gravity restore are still pending.
    Stopping,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    OutOfBounds,
    PipeCollision,
}

/// The delayed "die" cue + gravity restore.  Only fires if the game
/// session it was scheduled in is still the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub session: u64,
    pub due_ms: u64,
}

/// Tunable scalars, restored by every reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physics {
    pub gravity: f64,
    pub velocity_x: f64,
    pub flap_impulse: f64,
    pub pipes_delay_ms: u64,
    pub die_delay_ms: u64,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub physics: Physics,
    pub bird: Bird,
    /// Oldest pipe at the front; new pairs are pushed at the back.
    pub pipes: VecDeque<Pipe>,
    pub score: f64,
    pub phase: Phase,
    /// Current horizontal pipe speed (zeroed while stopped).
    pub velocity_x: f64,
    pub velocity_y: f64,
    /// Current gravity (zeroed while stopped).
    pub gravity: f64,
    /// Vertical gap between a pipe pair; resolved on the first spawn.
    pub opening_space: Option<f64>,
    /// Bumped by every reset.
    pub session: u64,
    pub pending: Option<ScheduledTask>,
    /// Milliseconds since the game was created.
    pub clock_ms: u64,
    pub next_spawn_ms: u64,
    /// Sound cues produced since the frontend last drained them.
    pub sounds: Vec<Sound>,
    pub frame: u64,
}

impl GameState {
    /// True from the moment of the crash until the next flap.
    pub fn is_game_over(&self) -> bool {
        self.phase != Phase::Playing
    }
}
