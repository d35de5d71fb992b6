mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use flappy_bird::audio::{SilentPlayer, SoundPlayer};
use flappy_bird::compute::{advance_clock, flap, init_state, update};
use flappy_bird::config::{viewport_width_px, Resolution, Settings, FRAME_MS};
use flappy_bird::entities::Physics;
use flappy_bird::input::{map_event, Action};
use flappy_bird::projection::Projection;

const FRAME: Duration = Duration::from_millis(FRAME_MS);

#[derive(Parser, Debug)]
#[command(name = "flappy_bird", about = "Flappy Bird for the terminal")]
struct Cli {
    /// Force the small 640×320 board.
    #[arg(long, conflicts_with = "desktop")]
    mobile: bool,
    /// Force the large 1280×640 board.
    #[arg(long)]
    desktop: bool,
    /// Don't play any sound.
    #[arg(long)]
    mute: bool,
    /// Seed the pipe placement RNG.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding the sfx_*.wav clips.
    #[arg(long, default_value = "assets/sounds")]
    sounds_dir: PathBuf,
    /// Write logs here (filtered by RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let resolution = if self.mobile {
            Some(Resolution::Mobile)
        } else if self.desktop {
            Some(Resolution::Desktop)
        } else {
            None
        };
        Settings {
            resolution,
            mute: self.mute,
            seed: self.seed,
            sounds_dir: self.sounds_dir,
            log_file: self.log_file,
        }
    }
}

// ── Ambient setup ─────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn make_player(settings: &Settings) -> Box<dyn SoundPlayer> {
    if settings.mute {
        return Box::new(SilentPlayer);
    }
    #[cfg(feature = "audio")]
    {
        use flappy_bird::audio::RodioPlayer;
        use flappy_bird::config::SOUND_VOLUME;
        match RodioPlayer::new(&settings.sounds_dir, SOUND_VOLUME) {
            Ok(player) => return Box::new(player),
            Err(e) => warn!("no audio output, continuing silently: {}", e),
        }
    }
    Box::new(SilentPlayer)
}

fn detect_resolution(settings: &Settings) -> Result<Resolution> {
    let (columns, pixel_width) = match terminal::window_size() {
        Ok(size) => (size.columns, size.width),
        Err(_) => (terminal::size().context("querying terminal size")?.0, 0),
    };
    let viewport = viewport_width_px(columns, pixel_width);
    let resolution = settings.resolve_resolution(viewport);
    info!("viewport {}px → {:?} board", viewport, resolution);
    Ok(resolution)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  One frame: drain input, fire due timers,
/// step the simulation, play queued sounds, draw.
fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let resolution = detect_resolution(settings)?;
    let mut state = init_state(resolution.board(), Physics::default());
    let mut player = make_player(settings);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let clock = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match map_event(&ev) {
                Some(Action::Quit) => {
                    info!("quit with score {}", state.score);
                    return Ok(());
                }
                Some(Action::Flap) => state = flap(&state),
                None => {}
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;
        state = advance_clock(&state, now_ms, &mut rng);
        state = update(&state);

        for sound in std::mem::take(&mut state.sounds) {
            player.play(sound);
        }

        let (columns, rows) = terminal::size()?;
        let proj = Projection::new(state.board, columns, rows);
        display::render(out, &state, &proj)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let settings = Cli::parse().into_settings();
    if let Some(path) = &settings.log_file {
        init_logging(path)?;
    }
    info!("starting with {:?}", settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &settings, &rx);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!("exiting on error: {:#}", e);
    }
    result
}
