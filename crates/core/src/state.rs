//! Widget-local palette state, changed only by keystrokes and the toggle
//! shortcut.

use tracing::{debug, info};

use crate::notes::Note;
use crate::search::{NoteMatcher, SearchHit};

/// What choosing a result leads to.
///
/// Notes carry no link, so there is nowhere to navigate; the choice is only
/// reported back to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Unlinked(Note),
}

pub struct PaletteState<M: NoteMatcher> {
    matcher: M,
    open: bool,
    term: String,
    results: Vec<SearchHit>,
    active: usize,
}

impl<M: NoteMatcher> PaletteState<M> {
    /// The palette starts open.
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            open: true,
            term: String::new(),
            results: Vec::new(),
            active: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_hit(&self) -> Option<&SearchHit> {
        self.results.get(self.active)
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            info!("palette opened");
        }
    }

    /// Hides the palette and forgets the term and results.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.term.clear();
        self.results.clear();
        self.active = 0;
        info!("palette closed");
    }

    pub fn push_char(&mut self, c: char) {
        if !self.open {
            return;
        }
        self.term.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        if !self.open || self.term.pop().is_none() {
            return;
        }
        self.refresh();
    }

    pub fn set_term(&mut self, term: &str) {
        if !self.open {
            return;
        }
        self.term = term.to_string();
        self.refresh();
    }

    pub fn move_up(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.active + 1 < self.results.len() {
            self.active += 1;
        }
    }

    pub fn select(&self) -> Option<Selection> {
        if !self.open {
            return None;
        }
        let hit = self.active_hit()?;
        info!(title = hit.note.title, "note selected");
        Some(Selection::Unlinked(hit.note))
    }

    fn refresh(&mut self) {
        self.results = if self.term.trim().is_empty() {
            Vec::new()
        } else {
            self.matcher.search(&self.term)
        };
        self.active = 0;
        debug!(term = %self.term, results = self.results.len(), "results replaced");
    }
}
