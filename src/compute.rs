/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG and the
/// sound cues queued on the returned state.

use std::collections::VecDeque;
use std::f64::consts::PI;

use log::{debug, info};
use rand::Rng;

use crate::config::{BIRD_HEIGHT, BIRD_WIDTH, PIPE_HEIGHT, PIPE_POINTS, PIPE_WIDTH};
use crate::entities::{
    Bird, Board, GameState, Phase, Physics, Pipe, PipeSprite, Rect, ScheduledTask, Sound,
    StopReason,
};

const MAX_UP_ANGLE: f64 = -PI / 4.0;
const MAX_DOWN_ANGLE: f64 = PI / 2.0;

// ── Constructors ─────────────────────────────────────────────────────────────

fn initial_bird(board: &Board) -> Bird {
    Bird {
        x: board.width / 8.0,
        y: board.height / 2.0,
        width: BIRD_WIDTH,
        height: BIRD_HEIGHT,
    }
}

/// Build the initial game state for a board.  The first pipe pair is due
/// one spawn interval after the clock starts.
pub fn init_state(board: Board, physics: Physics) -> GameState {
    GameState {
        board,
        physics,
        bird: initial_bird(&board),
        pipes: VecDeque::new(),
        score: 0.0,
        phase: Phase::Playing,
        velocity_x: physics.velocity_x,
        velocity_y: 0.0,
        gravity: physics.gravity,
        opening_space: None,
        session: 0,
        pending: None,
        clock_ms: 0,
        next_spawn_ms: physics.pipes_delay_ms,
        sounds: Vec::new(),
        frame: 0,
    }
}

/// Start a fresh session on the same board.  Any pending die task is
/// dropped, and the spawn timer and opening space carry over.
pub fn reset(state: &GameState) -> GameState {
    info!("reset after session {} (score {})", state.session, state.score);
    GameState {
        bird: initial_bird(&state.board),
        pipes: VecDeque::new(),
        score: 0.0,
        phase: Phase::Playing,
        velocity_x: state.physics.velocity_x,
        velocity_y: 0.0,
        gravity: state.physics.gravity,
        session: state.session + 1,
        pending: None,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// The single player action.  Restarts the game first if it is over.
pub fn flap(state: &GameState) -> GameState {
    let base = if state.is_game_over() {
        reset(state)
    } else {
        state.clone()
    };
    let mut sounds = base.sounds.clone();
    sounds.push(Sound::Flap);
    GameState {
        velocity_y: base.physics.flap_impulse,
        sounds,
        ..base
    }
}

// ── Game over ────────────────────────────────────────────────────────────────

/// Playing → Stopping.  Freezes the world, plays the hit cue and schedules
/// the die cue for this session.  No-op once the game is already over.
pub fn stop_game(state: &GameState, reason: StopReason) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }
    info!(
        "game over ({:?}) at frame {} with score {}",
        reason, state.frame, state.score
    );
    let mut sounds = state.sounds.clone();
    sounds.push(Sound::Hit);
    GameState {
        phase: Phase::Stopping,
        gravity: 0.0,
        velocity_x: 0.0,
        pending: Some(ScheduledTask {
            session: state.session,
            due_ms: state.clock_ms + state.physics.die_delay_ms,
        }),
        sounds,
        ..state.clone()
    }
}

/// Run the delayed die task.  A task left over from an earlier session
/// is discarded without touching the current game.
fn fire_scheduled(state: &GameState, task: ScheduledTask) -> GameState {
    if task.session != state.session {
        debug!(
            "dropping stale die task from session {} (now {})",
            task.session, state.session
        );
        return GameState {
            pending: None,
            ..state.clone()
        };
    }
    let mut sounds = state.sounds.clone();
    sounds.push(Sound::Die);
    GameState {
        phase: Phase::GameOver,
        gravity: state.physics.gravity,
        pending: None,
        sounds,
        ..state.clone()
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Strict AABB overlap: rectangles that only share an edge don't collide.
pub fn detect_collision(a: &impl Rect, b: &impl Rect) -> bool {
    a.x() < b.x() + b.width()
        && a.x() + a.width() > b.x()
        && a.y() < b.y() + b.height()
        && a.y() + a.height() > b.y()
}

/// Rendering tilt in radians, nose-up negative.  Purely cosmetic.
pub fn bird_angle(velocity_y: f64) -> f64 {
    (velocity_y * 0.1).clamp(MAX_UP_ANGLE, MAX_DOWN_ANGLE)
}

// ── Per-frame steps ──────────────────────────────────────────────────────────

/// Gravity step.  The bird can't rise above the top edge; falling past the
/// bottom edge ends the game.
pub fn update_bird(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.gravity != 0.0 {
        next.velocity_y += next.gravity;
        next.bird.y = (next.bird.y + next.velocity_y).max(0.0);
    }
    if next.bird.y + next.bird.height > next.board.height {
        next = stop_game(&next, StopReason::OutOfBounds);
    }
    next
}

/// Scroll every pipe in creation order, scoring and collision-checking
/// each one as it moves.
pub fn update_pipes(state: &GameState) -> GameState {
    let mut next = state.clone();
    for i in 0..next.pipes.len() {
        let velocity_x = next.velocity_x;
        let bird_x = next.bird.x;
        let pipe = &mut next.pipes[i];
        pipe.x += velocity_x;

        if !pipe.passed && bird_x > pipe.x + pipe.width {
            pipe.passed = true;
            next.score += PIPE_POINTS;
        }

        if detect_collision(&next.bird, &next.pipes[i]) {
            next = stop_game(&next, StopReason::PipeCollision);
        }
    }
    next
}

/// Drop pipes that have scrolled fully past the left edge.  Pipes age out
/// in creation order, so the sweep stops at the first visible one.
pub fn clear_garbage(state: &GameState) -> GameState {
    let mut pipes = state.pipes.clone();
    while pipes.front().map_or(false, |p| p.x + p.width < 0.0) {
        pipes.pop_front();
    }
    GameState {
        pipes,
        ..state.clone()
    }
}

/// Advance the simulation by one animation frame.
pub fn update(state: &GameState) -> GameState {
    let next = update_bird(state);
    let next = update_pipes(&next);
    let next = clear_garbage(&next);
    GameState {
        frame: next.frame + 1,
        ..next
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Push a new top/bottom pipe pair at the right edge.  The opening space
/// is resolved from the board height on the first call and kept after.
pub fn place_pipes(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }

    let opening_space = state.opening_space.unwrap_or(state.board.height / 4.0);
    let top_y = -PIPE_HEIGHT / 4.0 - rng.gen::<f64>() * (PIPE_HEIGHT / 2.0);
    let x = state.board.width;

    let mut pipes = state.pipes.clone();
    pipes.push_back(Pipe {
        x,
        y: top_y,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
        sprite: PipeSprite::Top,
        passed: false,
    });
    pipes.push_back(Pipe {
        x,
        y: top_y + PIPE_HEIGHT + opening_space,
        width: PIPE_WIDTH,
        height: PIPE_HEIGHT,
        sprite: PipeSprite::Bottom,
        passed: false,
    });
    debug!("spawned pipe pair at y={:.1} (gap {})", top_y, opening_space);

    GameState {
        pipes,
        opening_space: Some(opening_space),
        ..state.clone()
    }
}

// ── Timers ───────────────────────────────────────────────────────────────────

/// Move the game clock to `now_ms` and run whatever timers came due: the
/// pending die task, then the spawn interval.  A late interval fires once
/// and is rescheduled from `now_ms`, never replayed in a burst.
pub fn advance_clock(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    let mut next = GameState {
        clock_ms: now_ms.max(state.clock_ms),
        ..state.clone()
    };

    if let Some(task) = next.pending {
        if next.clock_ms >= task.due_ms {
            next = fire_scheduled(&next, task);
        }
    }

    if next.clock_ms >= next.next_spawn_ms {
        next = place_pipes(&next, rng);
        let delay = next.physics.pipes_delay_ms;
        let mut due = next.next_spawn_ms + delay;
        if due <= next.clock_ms {
            due = next.clock_ms + delay;
        }
        next.next_spawn_ms = due;
    }

    next
}
