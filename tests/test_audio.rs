use flappy_bird::audio::{SilentPlayer, SoundPlayer};
use flappy_bird::compute::*;
use flappy_bird::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Recorder {
    played: Vec<Sound>,
}

impl SoundPlayer for Recorder {
    fn play(&mut self, sound: Sound) {
        self.played.push(sound);
    }
}

fn drain(state: &mut GameState, player: &mut impl SoundPlayer) {
    for sound in std::mem::take(&mut state.sounds) {
        player.play(sound);
    }
}

#[test]
fn silent_player_accepts_every_cue() {
    let mut player = SilentPlayer;
    for sound in Sound::ALL {
        player.play(sound);
    }
}

#[test]
fn full_session_sound_sequence() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut player = Recorder::default();
    let mut s = init_state(Board { width: 1280.0, height: 640.0 }, Physics::default());

    s = flap(&s);
    drain(&mut s, &mut player);

    // Fall until the crash, 16 ms per frame
    let mut now = 0;
    while !s.is_game_over() {
        now += 16;
        s = advance_clock(&s, now, &mut rng);
        s = update(&s);
        drain(&mut s, &mut player);
    }
    s = advance_clock(&s, now + 2000, &mut rng);
    drain(&mut s, &mut player);

    assert_eq!(player.played, vec![Sound::Flap, Sound::Hit, Sound::Die]);
    assert!(!player.played.contains(&Sound::Point));
}

#[test]
fn quick_restart_skips_stale_die_cue() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut player = Recorder::default();
    let mut s = init_state(Board { width: 1280.0, height: 640.0 }, Physics::default());

    s = stop_game(&s, StopReason::OutOfBounds);
    s = flap(&s);
    s = advance_clock(&s, 2500, &mut rng);
    drain(&mut s, &mut player);

    assert_eq!(player.played, vec![Sound::Hit, Sound::Flap]);
    assert_eq!(s.gravity, Physics::default().gravity);
}
