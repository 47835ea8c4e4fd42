/// Per-frame input reduction.
///
/// The game loop drains every pending key event each frame and reduces the
/// batch to one `Intents` record — "was pressed at least once this frame"
/// booleans, not held-key state. Unrecognized keys fall through silently.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    pub confirm: bool,
    pub quit: bool,
    pub restart: bool,
    pub toggle_help: bool,
}

impl Intents {
    /// Fold one drained event into the frame's intent record.
    ///
    /// Press and Repeat both count as "pressed this frame" so classic
    /// terminals (which surface OS key-repeat as repeated Press events)
    /// and enhancement-capable ones behave the same. Release is ignored.
    pub fn absorb(&mut self, event: &Event) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return;
        }
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => self.left = true,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => self.right = true,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => self.up = true,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => self.down = true,
            KeyCode::Char(' ') => self.shoot = true,
            KeyCode::Enter => self.confirm = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart = true,
            KeyCode::Char('h') | KeyCode::Char('H') => self.toggle_help = true,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Reduce a whole drained batch in arrival order.
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Intents {
        let mut intents = Intents::default();
        for ev in events {
            intents.absorb(ev);
        }
        intents
    }
}
