use flappy_bird::compute::init_state;
use flappy_bird::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(PipeSprite::Top, PipeSprite::Top);
    assert_ne!(PipeSprite::Top, PipeSprite::Bottom);
    assert_eq!(Phase::Playing, Phase::Playing);
    assert_ne!(Phase::Stopping, Phase::GameOver);
    assert_ne!(Sound::Hit, Sound::Die);
}

#[test]
fn game_over_covers_stopping_and_game_over() {
    let board = Board { width: 640.0, height: 320.0 };
    let mut s = init_state(board, Physics::default());
    assert!(!s.is_game_over());
    s.phase = Phase::Stopping;
    assert!(s.is_game_over());
    s.phase = Phase::GameOver;
    assert!(s.is_game_over());
}

#[test]
fn every_sound_has_a_clip() {
    let names: Vec<&str> = Sound::ALL.iter().map(|s| s.file_name()).collect();
    assert_eq!(
        names,
        vec!["sfx_wing.wav", "sfx_point.wav", "sfx_hit.wav", "sfx_die.wav"]
    );
}

#[test]
fn rect_accessors_match_fields() {
    let pipe = Pipe {
        x: 1.0,
        y: 2.0,
        width: 64.0,
        height: 512.0,
        sprite: PipeSprite::Bottom,
        passed: false,
    };
    assert_eq!((pipe.x(), pipe.y(), pipe.width(), pipe.height()), (1.0, 2.0, 64.0, 512.0));
}

#[test]
fn game_state_clone_is_independent() {
    let board = Board { width: 1280.0, height: 640.0 };
    let original = init_state(board, Physics::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.bird.y = 99.0;
    cloned.score = 4.5;
    cloned.pipes.push_back(Pipe {
        x: 5.0,
        y: 5.0,
        width: 64.0,
        height: 512.0,
        sprite: PipeSprite::Top,
        passed: false,
    });

    assert_eq!(original.bird.y, 320.0);
    assert_eq!(original.score, 0.0);
    assert!(original.pipes.is_empty());
}
