use std::{cell::Cell, rc::Rc};

use feedback_tally::{Category, FeedbackTally, Locale, TallyStore};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Everything the terminal UI needs between two input events.
///
/// The tally lives in a [`TallyStore`]; a listener on the store marks the
/// frame dirty so the event loop only redraws after something changed.
#[derive(Debug)]
pub struct FeedbackState {
    /// Label table used for every caption
    pub locale: Locale,
    /// Option under the cursor
    pub selected: Category,
    /// Set once the user asked to quit
    pub exit: bool,
    store: TallyStore,
    dirty: Rc<Cell<bool>>,
}

impl FeedbackState {
    /// Creates an empty session. The first frame is always drawn.
    pub fn new(locale: Locale) -> Self {
        let dirty = Rc::new(Cell::new(true));

        let mut store = TallyStore::new();
        let flag = dirty.clone();
        store.subscribe(move |_| flag.set(true));

        Self {
            locale,
            selected: Category::Good,
            exit: false,
            store,
            dirty,
        }
    }

    /// The current tally
    pub fn tally(&self) -> &FeedbackTally {
        self.store.tally()
    }

    /// Records feedback for `category`.
    pub fn record(&mut self, category: Category) {
        self.store.record(category);
    }

    /// Moves the cursor to the next option.
    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
        self.request_redraw();
    }

    /// Moves the cursor to the previous option.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.previous();
        self.request_redraw();
    }

    /// Forces the next call to [`FeedbackState::take_redraw`] to return `true`.
    pub fn request_redraw(&self) {
        self.dirty.set(true);
    }

    /// Whether a frame needs to be drawn; clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Applies a key press.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.exit = true;
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                match Category::from_index(index) {
                    Some(category) => {
                        self.selected = category;
                        self.record(category);
                    }
                    None => debug!(%digit, "No option under this key"),
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.select_previous(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.record(self.selected),
            _ => (),
        }
    }
}
