/// Fixed tuning constants and startup settings.

use std::path::PathBuf;

use crate::entities::{Board, Physics};

// ── Sprites ───────────────────────────────────────────────────────────────────

pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const PIPE_WIDTH: f64 = 64.0;
pub const PIPE_HEIGHT: f64 = 512.0;

// ── Physics ───────────────────────────────────────────────────────────────────

pub const GRAVITY: f64 = 0.4;
pub const VELOCITY_X: f64 = -2.0;
pub const FLAP_IMPULSE: f64 = -6.0;
/// Points awarded each time a single pipe (top or bottom) is passed.
pub const PIPE_POINTS: f64 = 0.5;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const PIPES_DELAY_MS: u64 = 2000;
pub const DIE_DELAY_MS: u64 = 2000;
/// ≈60 FPS, the pace of a browser animation frame.
pub const FRAME_MS: u64 = 16;

pub const SOUND_VOLUME: f32 = 0.5;

// ── Resolution ────────────────────────────────────────────────────────────────

/// Viewports at or below this width (in pixels) get the small board.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
/// Assumed cell width when the terminal does not report its pixel size.
pub const FALLBACK_CELL_WIDTH_PX: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Desktop,
    Mobile,
}

impl Resolution {
    /// Pick the board size for a viewport; decided once at startup.
    pub fn for_viewport(width_px: u32) -> Resolution {
        if width_px <= MOBILE_BREAKPOINT_PX {
            Resolution::Mobile
        } else {
            Resolution::Desktop
        }
    }

    pub fn board(self) -> Board {
        match self {
            Resolution::Desktop => Board { width: 1280.0, height: 640.0 },
            Resolution::Mobile => Board { width: 640.0, height: 320.0 },
        }
    }
}

/// Best guess at the viewport width in pixels.  Terminals that don't
/// answer the pixel-size query report 0.
pub fn viewport_width_px(columns: u16, pixel_width: u16) -> u32 {
    if pixel_width > 0 {
        pixel_width as u32
    } else {
        columns as u32 * FALLBACK_CELL_WIDTH_PX
    }
}

impl Default for Physics {
    fn default() -> Self {
        Physics {
            gravity: GRAVITY,
            velocity_x: VELOCITY_X,
            flap_impulse: FLAP_IMPULSE,
            pipes_delay_ms: PIPES_DELAY_MS,
            die_delay_ms: DIE_DELAY_MS,
        }
    }
}

// ── Runtime settings ──────────────────────────────────────────────────────────

/// Everything the binary needs to know at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Forced board size; `None` means detect from the viewport.
    pub resolution: Option<Resolution>,
    pub mute: bool,
    /// Seed for pipe placement; `None` uses the thread RNG.
    pub seed: Option<u64>,
    pub sounds_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resolution: None,
            mute: false,
            seed: None,
            sounds_dir: PathBuf::from("assets/sounds"),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn resolve_resolution(&self, viewport_px: u32) -> Resolution {
        self.resolution
            .unwrap_or_else(|| Resolution::for_viewport(viewport_px))
    }
}
