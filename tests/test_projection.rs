use flappy_bird::entities::Board;
use flappy_bird::projection::Projection;

// 1280×640 board on a 128×33 terminal: 10 px per column, 20 px per row
fn make_projection() -> Projection {
    Projection::new(Board { width: 1280.0, height: 640.0 }, 128, 33)
}

#[test]
fn columns_map_and_clip() {
    let p = make_projection();
    assert_eq!(p.column(0.0), Some(0));
    assert_eq!(p.column(15.0), Some(1));
    assert_eq!(p.column(1279.0), Some(127));
    assert_eq!(p.column(1280.0), None);
    assert_eq!(p.column(-1.0), None);
}

#[test]
fn rows_skip_hud_line() {
    let p = make_projection();
    assert_eq!(p.row(0.0), Some(1));
    assert_eq!(p.row(639.0), Some(32));
    assert_eq!(p.row(640.0), None);
    assert_eq!(p.row(-0.5), None);
}

#[test]
fn pipe_entering_from_right_edge() {
    let p = make_projection();
    assert_eq!(p.column_span(1216.0, 64.0), 121..128);
    assert!(p.column_span(1280.0, 64.0).is_empty());
}

#[test]
fn pipe_span_touches_partial_cells() {
    let p = make_projection();
    assert_eq!(p.column_span(95.0, 64.0), 9..16);
}

#[test]
fn offscreen_spans_are_empty() {
    let p = make_projection();
    assert!(p.column_span(-100.0, 64.0).is_empty());
    assert!(p.row_span(-600.0, 512.0).is_empty());
}

#[test]
fn top_pipe_clipped_at_board_top() {
    let p = make_projection();
    assert_eq!(p.row_span(-200.0, 512.0), 1..17);
}

#[test]
fn bottom_pipe_clipped_at_board_bottom() {
    let p = make_projection();
    assert_eq!(p.row_span(400.0, 512.0), 21..33);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let p = Projection::new(Board { width: 640.0, height: 320.0 }, 0, 0);
    assert_eq!(p.column(10.0), None);
    assert_eq!(p.row(10.0), None);
    assert!(p.column_span(0.0, 64.0).is_empty());
    assert!(p.row_span(0.0, 64.0).is_empty());
}
