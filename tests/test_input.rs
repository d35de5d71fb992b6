use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use flappy_bird::input::{map_event, Action};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_kind(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn mouse(kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 3,
        row: 4,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn flap_keys() {
    for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('x'), KeyCode::Char('X')] {
        assert_eq!(map_event(&key(code)), Some(Action::Flap), "{:?}", code);
    }
}

#[test]
fn quit_keys() {
    assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(map_event(&key(KeyCode::Esc)), Some(Action::Quit));
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(map_event(&ctrl_c), Some(Action::Quit));
}

#[test]
fn other_keys_ignored() {
    assert_eq!(map_event(&key(KeyCode::Down)), None);
    assert_eq!(map_event(&key(KeyCode::Char('c'))), None);
    assert_eq!(map_event(&key(KeyCode::Enter)), None);
}

#[test]
fn repeat_and_release_do_not_flap() {
    assert_eq!(map_event(&key_kind(KeyCode::Char(' '), KeyEventKind::Repeat)), None);
    assert_eq!(map_event(&key_kind(KeyCode::Char(' '), KeyEventKind::Release)), None);
}

#[test]
fn mouse_down_flaps() {
    assert_eq!(
        map_event(&mouse(MouseEventKind::Down(MouseButton::Left))),
        Some(Action::Flap)
    );
    assert_eq!(
        map_event(&mouse(MouseEventKind::Down(MouseButton::Right))),
        Some(Action::Flap)
    );
    assert_eq!(map_event(&mouse(MouseEventKind::Up(MouseButton::Left))), None);
    assert_eq!(map_event(&mouse(MouseEventKind::Moved)), None);
}

#[test]
fn resize_ignored() {
    assert_eq!(map_event(&Event::Resize(80, 24)), None);
}
