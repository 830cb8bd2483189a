//! Application state for the terminal front end.
//!
//! The app owns an [`Engine`] and the little UI state the engine does not
//! care about: the board cursor, the focused panel and the history selection.

use super::input::{Action, Focus, action_for, move_cursor};
use crate::{Engine, GameView, IgnoredInput, Position, Settings};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    last_ignored: Option<IgnoredInput>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game.
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: Engine::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            last_ignored: None,
            should_quit: false,
        }
    }

    /// The engine being played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Front-end settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the history list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The most recent input the engine ignored, cleared by the next accepted one.
    pub fn last_ignored(&self) -> Option<IgnoredInput> {
        self.last_ignored
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Engine view for rendering.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(self.focus, key) {
            self.dispatch(action);
        }
    }

    /// Applies one action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.cell_clicked(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.cell_clicked(pos);
            }
            Action::SelectHistory(delta) => {
                let last = self.engine.history().len() - 1;
                self.selected = self.selected.saturating_add_signed(delta).min(last);
            }
            Action::JumpToSelected => self.history_step_selected(self.selected),
            Action::Step(delta) => {
                if let Some(step) = self.engine.step().checked_add_signed(delta) {
                    self.history_step_selected(step);
                }
            }
            Action::JumpToStart => self.history_step_selected(0),
            Action::Reset => self.reset_requested(),
            Action::ToggleFocus => self.focus = self.focus.toggle(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn cell_clicked(&mut self, pos: Position) {
        let result = self.engine.apply_move(pos).map(|_| ());
        self.record(result);
    }

    fn history_step_selected(&mut self, step: usize) {
        let result = self.engine.jump_to(step);
        self.record(result);
    }

    fn reset_requested(&mut self) {
        self.engine.reset();
        self.record(Ok(()));
    }

    fn record(&mut self, result: Result<(), IgnoredInput>) {
        match result {
            Ok(()) => self.last_ignored = None,
            Err(ignored) => {
                debug!(%ignored, "Input ignored");
                self.last_ignored = Some(ignored);
            }
        }
        self.selected = self.engine.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Outcome};

    fn app() -> App {
        App::new(Settings::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.engine().board().get(Position::Center).mark(), Some(Mark::X));
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_digit_moves_cursor_and_places() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.cursor(), Position::TopRight);
        assert_eq!(app.engine().board().get(Position::TopRight).mark(), Some(Mark::X));
    }

    #[test]
    fn test_occupied_click_is_recorded_not_applied() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.engine().history().len(), 2);
        assert_eq!(
            app.last_ignored(),
            Some(IgnoredInput::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_history_focus_jumps_to_selection() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.engine().step(), 0);
        assert_eq!(app.engine().history().len(), 3);
        assert_eq!(app.engine().outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_bracket_steps_and_clamps() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.engine().step(), 0);
        press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(app.engine().step(), 1);
        assert!(matches!(
            app.last_ignored(),
            Some(IgnoredInput::StepOutOfRange { step: 2, len: 2 })
        ));
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.engine(), &Engine::new());
        assert_eq!(app.selected(), 0);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
