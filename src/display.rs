/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::f64::consts::PI;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::compute::bird_angle;
use flappy_bird::entities::{GameState, Pipe, PipeSprite};
use flappy_bird::projection::Projection;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PIPE: Color = Color::Green;
const C_PIPE_CAP: Color = Color::DarkGreen;
const C_BIRD: Color = Color::Yellow;
const C_BEAK: Color = Color::Red;
const C_SCORE: Color = Color::White;
const C_GAME_OVER: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Block font for the score ──────────────────────────────────────────────────

const GLYPH_WIDTH: u16 = 3;
const GLYPH_HEIGHT: u16 = 5;

fn glyph(c: char) -> Option<[&'static str; 5]> {
    let rows = match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", " ##", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        '.' => ["   ", "   ", "   ", "   ", " # "],
        _ => return None,
    };
    Some(rows)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    proj: &Projection,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for pipe in &state.pipes {
        draw_pipe(out, pipe, proj)?;
    }
    draw_bird(out, state, proj)?;
    draw_hud(out, state, proj)?;

    if state.is_game_over() {
        draw_game_over(out, proj)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, proj.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(out: &mut W, pipe: &Pipe, proj: &Projection) -> std::io::Result<()> {
    let cols = proj.column_span(pipe.x, pipe.width);
    let rows = proj.row_span(pipe.y, pipe.height);
    if cols.is_empty() || rows.is_empty() {
        return Ok(());
    }

    // The cap sits on the end facing the opening
    let cap_row = match pipe.sprite {
        PipeSprite::Top => rows.end - 1,
        PipeSprite::Bottom => rows.start,
    };
    let body = "█".repeat(cols.len());
    let cap = "▓".repeat(cols.len());

    for row in rows {
        out.queue(cursor::MoveTo(cols.start, row))?;
        if row == cap_row {
            out.queue(style::SetForegroundColor(C_PIPE_CAP))?;
            out.queue(Print(&cap))?;
        } else {
            out.queue(style::SetForegroundColor(C_PIPE))?;
            out.queue(Print(&body))?;
        }
    }
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    let b = &state.bird;
    let (Some(col), Some(row)) = (
        proj.column(b.x + b.width / 2.0),
        proj.row(b.y + b.height / 2.0),
    ) else {
        return Ok(());
    };

    // Body + a beak that tilts with the bird
    let angle = bird_angle(state.velocity_y);
    let beak = if angle <= -PI / 8.0 {
        "↗"
    } else if angle < PI / 8.0 {
        "→"
    } else if angle < 3.0 * PI / 8.0 {
        "↘"
    } else {
        "↓"
    };

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BIRD))?;
    out.queue(Print("●"))?;
    if col + 1 < proj.columns {
        out.queue(style::SetForegroundColor(C_BEAK))?;
        out.queue(Print(beak))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, proj: &Projection) -> std::io::Result<()> {
    let text = format!("{}", state.score);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ / X / click : Flap   Q : Quit"))?;

    let glyph_cols = text.chars().count() as u16 * (GLYPH_WIDTH + 1);
    let fits = proj.rows > GLYPH_HEIGHT * 3 && proj.columns > glyph_cols + 2;
    if fits {
        draw_big_text(out, &text, proj.columns / 2, 1)
    } else {
        // Too small for the block font — plain text on the HUD row
        let x = (proj.columns / 2).saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(x, 0))?;
        out.queue(style::SetForegroundColor(C_SCORE))?;
        out.queue(Print(&text))?;
        Ok(())
    }
}

/// Draw `text` in the block font, horizontally centred on `cx`.
fn draw_big_text<W: Write>(out: &mut W, text: &str, cx: u16, top: u16) -> std::io::Result<()> {
    let width = text.chars().count() as u16 * (GLYPH_WIDTH + 1);
    let left = cx.saturating_sub(width / 2);

    out.queue(style::SetForegroundColor(C_SCORE))?;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let x = left + i as u16 * (GLYPH_WIDTH + 1);
        for (dy, line) in rows.iter().enumerate() {
            for (dx, px) in line.chars().enumerate() {
                if px == '#' {
                    out.queue(cursor::MoveTo(x + dx as u16, top + dy as u16))?;
                    out.queue(Print("█"))?;
                }
            }
        }
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, proj: &Projection) -> std::io::Result<()> {
    let cx = proj.columns / 2;
    let cy = proj.rows / 2;

    let title = "G A M E   O V E R";
    out.queue(cursor::MoveTo(cx.saturating_sub(title.chars().count() as u16 / 2), cy))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    out.queue(Print(title))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;

    let hint = "Flap to play again";
    out.queue(cursor::MoveTo(cx.saturating_sub(hint.chars().count() as u16 / 2), cy + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
