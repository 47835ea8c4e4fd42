/// Rendering layer — all terminal I/O lives here.
///
/// The play field is composed into a fixed WIDTH×HEIGHT character grid
/// (immediate mode, rebuilt from scratch each frame) and flushed as a full
/// redraw. No game logic is performed; this module only translates state
/// into terminal commands and never mutates the simulation.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_swarm::entities::{
    Bullet, BulletOwner, BulletPattern, GameState, HostileTier, Screen, HEIGHT, PLAYER_ROW,
    WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_PLAYER_SHOT: Color = Color::Cyan;
const C_ENEMY_SHOT: Color = Color::Magenta;
const C_SPREAD_SHOT: Color = Color::Yellow;
const C_STANDARD: Color = Color::Green;
const C_BOSS: Color = Color::Red;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Rotating gameplay tips shown under the status line.
const TIPS: &[&str] = &[
    "Tip: bosses drop a row when they bounce off a wall — don't camp the edges",
    "Tip: a new boss warps in every 15 seconds, cleared wave or not",
    "Tip: every 3rd wave ends with a giant boss — 15 hits to bring it down",
    "Tip: spread shots sway sideways as they fall; watch the drift",
    "Tip: H shows the controls overlay without pausing the action",
];

// ── Character grid ────────────────────────────────────────────────────────────

/// Fixed-size glyph buffer. Out-of-range writes are silently dropped, so
/// sprite edges can hang off the field without special-casing.
struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new() -> Grid {
        Grid {
            cells: vec![vec![' '; WIDTH as usize]; HEIGHT as usize],
        }
    }

    fn set(&mut self, x: i32, y: i32, c: char) {
        if (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) {
            self.cells[y as usize][x as usize] = c;
        }
    }

    fn text(&mut self, x: i32, y: i32, s: &str) {
        for (i, c) in s.chars().enumerate() {
            self.set(x + i as i32, y, c);
        }
    }
}

/// Colour class for a field glyph, so each row can be flushed as runs of
/// same-coloured characters instead of one colour change per cell.
fn glyph_color(c: char) -> Color {
    match c {
        'A' | '<' | '>' => C_PLAYER,
        '|' => C_PLAYER_SHOT,
        '!' => C_ENEMY_SHOT,
        '*' => C_SPREAD_SHOT,
        'E' | '-' => C_STANDARD,
        'B' | '[' | ']' | '=' | '/' | '\\' | '(' | ')' | 'o' | 'v' => C_BOSS,
        _ => Color::White,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.screen {
        Screen::Title => draw_title(out, state)?,
        Screen::Playing | Screen::GameOver => draw_play(out, state)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (HEIGHT + 4) as u16))?;
    out.flush()?;
    Ok(())
}

// ── Play field ────────────────────────────────────────────────────────────────

fn compose_field(state: &GameState) -> Grid {
    let mut grid = Grid::new();

    for b in &state.bullets {
        if b.active {
            grid.set(b.x, b.y, bullet_glyph(b));
        }
    }

    for h in &state.hostiles {
        if !h.alive {
            continue;
        }
        match h.tier {
            HostileTier::Standard => {
                grid.set(h.x - 1, h.y, '-');
                grid.set(h.x, h.y, 'E');
                grid.set(h.x + 1, h.y, '-');
            }
            HostileTier::Boss => {
                grid.set(h.x - 1, h.y, '[');
                grid.set(h.x, h.y, 'B');
                grid.set(h.x + 1, h.y, ']');
                grid.text(h.x - 1, h.y + 1, "===");
            }
            HostileTier::GiantBoss => {
                grid.text(h.x - 4, h.y - 1, "/=======\\");
                grid.text(h.x - 4, h.y, "([o]=[o])");
                grid.text(h.x - 4, h.y + 1, "\\=v=v=v=/");
            }
        }
    }

    grid.set(state.player.x - 1, PLAYER_ROW, '<');
    grid.set(state.player.x, PLAYER_ROW, 'A');
    grid.set(state.player.x + 1, PLAYER_ROW, '>');

    if state.help_visible {
        draw_help_overlay(&mut grid);
    }
    if state.screen == Screen::GameOver {
        draw_game_over_overlay(&mut grid, state);
    }

    grid
}

fn bullet_glyph(b: &Bullet) -> char {
    match (b.owner, b.pattern) {
        (BulletOwner::Player, _) => '|',
        (BulletOwner::Enemy, BulletPattern::Straight) => '!',
        (BulletOwner::Enemy, BulletPattern::SpreadWave) => '*',
    }
}

fn draw_play<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let grid = compose_field(state);
    let bar: String = "=".repeat(WIDTH as usize);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(&bar))?;

    // Flush each grid row as runs of identically-coloured glyphs.
    for (row, cells) in grid.cells.iter().enumerate() {
        out.queue(cursor::MoveTo(0, row as u16 + 1))?;
        let mut run = String::new();
        let mut run_color = Color::White;
        for &c in cells {
            let color = glyph_color(c);
            if color != run_color && !run.is_empty() {
                out.queue(style::SetForegroundColor(run_color))?;
                out.queue(Print(&run))?;
                run.clear();
            }
            run_color = color;
            run.push(c);
        }
        if !run.is_empty() {
            out.queue(style::SetForegroundColor(run_color))?;
            out.queue(Print(&run))?;
        }
    }

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, HEIGHT as u16 + 1))?;
    out.queue(Print(&bar))?;

    // Status line.
    out.queue(cursor::MoveTo(0, HEIGHT as u16 + 2))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Score: {}  |  Lives: {}  |  Wave: {}",
        state.score, state.lives.max(0), state.wave.wave
    )))?;

    // Rotating tip line, advancing every 300 frames.
    let tip = TIPS[(state.frame_count / 300) as usize % TIPS.len()];
    out.queue(cursor::MoveTo(0, HEIGHT as u16 + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(tip))?;

    Ok(())
}

// ── Overlays (composed into the grid, so they freeze with the field) ──────────

fn draw_help_overlay(grid: &mut Grid) {
    let lines = [
        "+------------- CONTROLS -------------+",
        "|  A / D  or  arrows .... move       |",
        "|  SPACE ................ shoot      |",
        "|  H .................... this box   |",
        "|  R .................... restart    |",
        "|  Q / ESC .............. quit       |",
        "+------------------------------------+",
    ];
    let x = (WIDTH - lines[0].len() as i32) / 2;
    let y = (HEIGHT - lines.len() as i32) / 2;
    for (i, line) in lines.iter().enumerate() {
        grid.text(x, y + i as i32, line);
    }
}

fn draw_game_over_overlay(grid: &mut Grid, state: &GameState) {
    let score_line = format!("   FINAL SCORE: {:<6}", state.score);
    let wave_line = format!("   WAVE REACHED: {:<5}", state.wave.wave);
    let lines: [&str; 7] = [
        "+======================+",
        "|      GAME  OVER      |",
        "+======================+",
        score_line.as_str(),
        wave_line.as_str(),
        "   R - Restart        ",
        "   Q - Quit           ",
    ];
    let x = (WIDTH - lines[0].len() as i32) / 2;
    let y = (HEIGHT - lines.len() as i32) / 2;
    for (i, line) in lines.iter().enumerate() {
        grid.text(x, y + i as i32, line);
    }
}

// ── Title screen ──────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let cx = (WIDTH / 2) as u16;
    let centered = |s: &str| cx.saturating_sub(s.chars().count() as u16 / 2);

    let title = "*  S T A R   S W A R M  *";
    out.queue(cursor::MoveTo(centered(title), 3))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let sub = "a terminal formation shooter";
    out.queue(cursor::MoveTo(centered(sub), 4))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(sub))?;

    let items = ["Start Game", "Quit"];
    for (i, label) in items.iter().enumerate() {
        let marker = if state.selection == i { "> " } else { "  " };
        let line = format!("{}{}", marker, label);
        out.queue(cursor::MoveTo(cx.saturating_sub(6), 8 + i as u16))?;
        if state.selection == i {
            out.queue(style::SetForegroundColor(Color::Yellow))?;
        } else {
            out.queue(style::SetForegroundColor(Color::White))?;
        }
        out.queue(Print(line))?;
    }

    let mechanics = [
        "-E-  standard raider ...... 10 pts",
        "[B]  boss, 3 hits ......... 100 pts",
        "(o)  giant boss, 15 hits .. 300 pts, every 3rd wave",
    ];
    out.queue(style::SetForegroundColor(C_HINT))?;
    for (i, line) in mechanics.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(24), 13 + i as u16))?;
        out.queue(Print(*line))?;
    }

    let hint = "W/S or arrows : select   ENTER : confirm   Q : quit";
    out.queue(cursor::MoveTo(centered(hint), 18))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}
