mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use star_swarm::compute::{advance, init_state};
use star_swarm::entities::Screen;
use star_swarm::input::Intents;

/// Fixed frame budget, ≈60 FPS. Simulation counters are frame-locked, so an
/// overrun frame just skips its sleep — there is no catch-up stepping.
const FRAME: Duration = Duration::from_micros(16_667);

/// Relaxed cadence while parked on the title or game-over screen: keep
/// rendering and polling for restart/quit without spinning at full rate.
const IDLE_FRAME: Duration = Duration::from_millis(100);

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drain input → reduce to one per-frame intent record → advance one fixed
/// simulation step → full-frame redraw → sleep off the rest of the budget.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_state();

    loop {
        let frame_start = Instant::now();

        // Non-blocking: everything queued since last frame, possibly nothing.
        let mut events: Vec<Event> = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        let intents = Intents::from_events(&events);

        state = advance(&state, &intents, &mut rng);
        if state.quit {
            return Ok(());
        }

        display::render(out, &state)?;

        let budget = if state.screen == Screen::Playing {
            FRAME
        } else {
            IDLE_FRAME
        };
        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
