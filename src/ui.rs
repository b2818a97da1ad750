//! Terminal frontend
//!
//! All terminal I/O lives here: arena-to-cell scaled rendering of the match
//! state, held-key tracking fed by a dedicated input thread, and the modal
//! dialog boxes the match core opens through [`Dialogs`]. No game logic is
//! performed; this module only translates state into terminal commands and
//! key events into a per-frame input snapshot.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
};

use crate::config::MatchConfig;
use crate::dialog::Dialogs;
use crate::sim::{FrameInput, Layer, MatchState, Rect, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BALL: Color = Color::White;
const C_PADDLE: Color = Color::Grey;
const C_HEART: Color = Color::Red;
const C_LIVES_TEXT: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_DIALOG: Color = Color::White;
const C_BRICKS: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
];

/// A key counts as held if its last press/repeat event arrived within this
/// window. Covers terminals that don't emit key-release events: the OS
/// key-repeat interval is shorter than this, so an actively held key keeps
/// refreshing its entry while a released one expires.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Tracks which keys are currently held, by last-seen timestamp
#[derive(Debug, Default)]
pub struct HeldKeys {
    last_seen: HashMap<KeyCode, Instant>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or repeat event
    pub fn record_press(&mut self, code: KeyCode) {
        self.last_seen.insert(code, Instant::now());
    }

    /// Record a release event (keyboard-enhancement terminals)
    pub fn record_release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    /// Forget everything (after a modal dialog swallowed the event stream)
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.last_seen
            .get(&code)
            .map(|seen| seen.elapsed() <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// The two logical inputs the match core understands
    pub fn frame_input(&self) -> FrameInput {
        let left_held = self.is_held(KeyCode::Left)
            || self.is_held(KeyCode::Char('a'))
            || self.is_held(KeyCode::Char('A'));
        let right_held = self.is_held(KeyCode::Right)
            || self.is_held(KeyCode::Char('d'))
            || self.is_held(KeyCode::Char('D'));
        FrameInput {
            left_held,
            right_held,
        }
    }
}

/// Dedicate a thread to blocking event reads, sending them through a channel
/// so the frame loop never has to block on input I/O
pub fn spawn_input_thread() -> Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

/// Switch the terminal into game mode (raw, alternate screen, hidden cursor).
/// Also asks for key-release events; terminals without the keyboard
/// enhancement fall back to the hold-window expiry in [`HeldKeys`].
pub fn setup_terminal() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let _ = out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ));
    Ok(())
}

/// Undo [`setup_terminal`]; called on every exit path
pub fn restore_terminal() {
    let mut out = io::stdout();
    let _ = out.execute(PopKeyboardEnhancementFlags);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Maps the arena onto the terminal cell grid and renders the match
pub struct TerminalUi<W: Write> {
    out: W,
    events: Receiver<Event>,
    held: HeldKeys,
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl<W: Write> TerminalUi<W> {
    /// `events` is fed by [`spawn_input_thread`]; `cols`/`rows` come from
    /// `terminal::size()` at startup
    pub fn new(out: W, events: Receiver<Event>, cols: u16, rows: u16, config: &MatchConfig) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            events,
            held: HeldKeys::new(),
            cols,
            rows,
            scale_x: cols as f32 / config.arena_width,
            scale_y: rows as f32 / config.arena_height,
        }
    }

    /// Drain pending key events into the held-key map. Returns true when the
    /// player asked to quit (q / Esc / ctrl-c) or the input thread died.
    pub fn poll_input(&mut self) -> bool {
        loop {
            match self.events.try_recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                })) => match kind {
                    KeyEventKind::Press => {
                        if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                            return true;
                        }
                        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                            return true;
                        }
                        self.held.record_press(code);
                    }
                    KeyEventKind::Repeat => self.held.record_press(code),
                    KeyEventKind::Release => self.held.record_release(code),
                },
                Ok(_) => {} // resize, mouse, focus - ignored
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Disconnected) => return true,
            }
        }
    }

    /// Held-key snapshot for the next tick
    pub fn frame_input(&self) -> FrameInput {
        self.held.frame_input()
    }

    /// Render one complete frame
    pub fn render(&mut self, state: &MatchState) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_walls()?;

        // Background layer: HUD widgets (the backdrop is the cleared screen)
        for obj in state.scene.objects(Layer::Background) {
            match &obj.sprite {
                Sprite::Backdrop | Sprite::Brick => {}
                Sprite::Heart => {
                    let (col, row) = self.cell(obj.rect.pos.x, obj.rect.pos.y);
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(style::SetForegroundColor(C_HEART))?;
                    self.out.queue(Print("♥"))?;
                }
                Sprite::Text(text) => {
                    let (col, row) = self.cell(obj.rect.pos.x, obj.rect.pos.y);
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(style::SetForegroundColor(C_LIVES_TEXT))?;
                    self.out.queue(Print(text))?;
                }
            }
        }

        // Static layer: bricks, banded by grid row
        let first_row = state.config.border_width + state.config.brick_border_clearance;
        let pitch = state.config.brick_height + state.config.brick_brick_clearance;
        for obj in state.scene.objects(Layer::Static) {
            let band = ((obj.rect.top() - first_row) / pitch).max(0.0) as usize;
            self.draw_bar(&obj.rect, C_BRICKS[band % C_BRICKS.len()])?;
        }

        self.draw_bar(&state.paddle.rect(), C_PADDLE)?;

        // The ball disappears once it falls past the bottom edge
        if state.ball.pos.y <= state.config.arena_height {
            let (col, row) = self.cell(state.ball.pos.x, state.ball.pos.y);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(C_BALL))?;
            self.out.queue(Print("●"))?;
        }

        // Controls hint, bottom row
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("← → / A D : Move   Q : Quit"))?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the frontend, handing back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Arena pixel coordinates to a clamped terminal cell
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = ((x * self.scale_x) as i32).clamp(0, self.cols as i32 - 1) as u16;
        let row = ((y * self.scale_y) as i32).clamp(0, self.rows as i32 - 1) as u16;
        (col, row)
    }

    /// Solid horizontal bar spanning a rectangle's extent
    fn draw_bar(&mut self, rect: &Rect, color: Color) -> io::Result<()> {
        let (col, row) = self.cell(rect.left(), rect.center().y);
        let (end, _) = self.cell(rect.right(), rect.center().y);
        let width = (end.saturating_sub(col)).max(1) as usize;
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print("█".repeat(width)))?;
        Ok(())
    }

    /// Left/right walls and the top bar; the bottom edge stays open
    fn draw_walls(&mut self) -> io::Result<()> {
        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(Print(format!(
            "┌{}┐",
            "─".repeat(self.cols.saturating_sub(2) as usize)
        )))?;

        for row in 1..self.rows.saturating_sub(1) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(self.cols.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }

    /// Centered modal box: message line plus a key hint
    fn draw_dialog(&mut self, message: &str, hint: &str) -> io::Result<()> {
        let inner = message.chars().count().max(hint.chars().count()) + 4;
        let lines = [
            format!("╔{}╗", "═".repeat(inner)),
            format!("║{message:^inner$}║"),
            format!("║{hint:^inner$}║"),
            format!("╚{}╝", "═".repeat(inner)),
        ];

        let cx = self.cols / 2;
        let cy = self.rows / 2;
        for (i, line) in lines.iter().enumerate() {
            let col = cx.saturating_sub(line.chars().count() as u16 / 2);
            let row = cy.saturating_sub(2) + i as u16;
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(C_DIALOG))?;
            self.out.queue(Print(line))?;
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Dialogs for TerminalUi<W> {
    fn notify(&mut self, message: &str) {
        if self.draw_dialog(message, "ENTER to continue").is_err() {
            return;
        }
        loop {
            match self.events.recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                })) => {
                    if matches!(code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break, // input thread gone, don't spin
            }
        }
        // Anything held before the dialog is stale now
        self.held.clear();
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.draw_dialog(message, "[Y]es / [N]o").is_err() {
            return false;
        }
        let answer = loop {
            match self.events.recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                })) => match code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => break true,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => break false,
                    _ => {}
                },
                Ok(_) => {}
                Err(_) => break false,
            }
        };
        self.held.clear();
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_frame_input() {
        let mut held = HeldKeys::new();
        assert_eq!(held.frame_input(), FrameInput::default());

        held.record_press(KeyCode::Left);
        assert!(held.frame_input().left_held);
        assert!(!held.frame_input().right_held);

        held.record_press(KeyCode::Char('d'));
        let input = held.frame_input();
        assert!(input.left_held && input.right_held);

        held.record_release(KeyCode::Left);
        assert!(!held.frame_input().left_held);
        assert!(held.frame_input().right_held);
    }

    #[test]
    fn test_held_keys_expire_without_refresh() {
        let mut held = HeldKeys::new();
        held.record_press(KeyCode::Right);
        assert!(held.is_held(KeyCode::Right));
        std::thread::sleep(HOLD_WINDOW + Duration::from_millis(50));
        assert!(!held.is_held(KeyCode::Right));
    }

    #[test]
    fn test_poll_input_tracks_events_and_quit() {
        let config = MatchConfig::default();
        let (tx, rx) = mpsc::channel();
        let mut ui = TerminalUi::new(Vec::new(), rx, 80, 24, &config);

        tx.send(Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)))
            .unwrap();
        assert!(!ui.poll_input());
        assert!(ui.frame_input().left_held);

        tx.send(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        assert!(ui.poll_input());
    }

    #[test]
    fn test_render_draws_scene_into_writer() {
        let config = MatchConfig::default();
        let (_tx, rx) = mpsc::channel();
        let state = MatchState::new(config.clone(), 3).unwrap();
        let mut ui = TerminalUi::new(Vec::new(), rx, 100, 30, &config);

        ui.render(&state).unwrap();
        let output = String::from_utf8_lossy(&ui.into_inner()).to_string();

        assert!(output.contains("●"), "ball glyph missing");
        assert!(output.contains("♥"), "heart icons missing");
        assert!(output.contains("█"), "brick/paddle bars missing");
        assert!(output.contains("3"), "numeric lives readout missing");
    }

    #[test]
    fn test_dialog_box_centers_message() {
        let config = MatchConfig::default();
        let (_tx, rx) = mpsc::channel();
        let mut ui = TerminalUi::new(Vec::new(), rx, 80, 24, &config);

        ui.draw_dialog("You win!", "[Y]es / [N]o").unwrap();
        let output = String::from_utf8_lossy(&ui.into_inner()).to_string();
        assert!(output.contains("You win!"));
        assert!(output.contains("[Y]es / [N]o"));
        assert!(output.contains("╔"));
    }
}
