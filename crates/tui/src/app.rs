use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use notepalette_core::config::PaletteConfig;
use notepalette_core::notes;
use notepalette_core::search::{FuzzySearcher, SearchOptions};
use notepalette_core::state::{PaletteState, Selection};
use tracing::info;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PLACEHOLDER: &str = "travel, work, recipes, etc.";

pub struct App {
    pub palette: PaletteState<FuzzySearcher>,
    pub toggle_key: char,
    pub signature: Option<String>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &PaletteConfig) -> Self {
        let searcher = FuzzySearcher::new(notes::all(), SearchOptions::from(config));
        Self {
            palette: PaletteState::new(searcher),
            toggle_key: config.toggle_key.to_ascii_lowercase(),
            signature: config.signature.clone(),
            status: None,
            should_quit: false,
        }
    }

    /// Bottom-right page footer.
    pub fn footer(&self) -> String {
        match &self.signature {
            Some(sig) => format!("{} · v{}", sig, VERSION),
            None => format!("v{}", VERSION),
        }
    }

    fn is_toggle(&self, key: &KeyEvent) -> bool {
        let chord = KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META;
        matches!(key.code, KeyCode::Char(c) if c.to_ascii_lowercase() == self.toggle_key)
            && key.modifiers.intersects(chord)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Terminals with enhanced keyboard reporting also send releases.
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.is_toggle(&key) {
            self.palette.toggle();
            self.status = None;
            return;
        }

        if !self.palette.is_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.palette.close();
                self.status = None;
            }
            KeyCode::Enter => {
                if let Some(Selection::Unlinked(note)) = self.palette.select() {
                    info!(title = note.title, "selection has no link");
                    self.status = Some(format!("\"{}\" has no link to open", note.title));
                }
            }
            KeyCode::Up => self.palette.move_up(),
            KeyCode::Down => self.palette.move_down(),
            KeyCode::Backspace => self.palette.pop_char(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.palette.push_char(c);
                self.status = None;
            }
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if !self.palette.is_open() {
            return;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let term = format!("{}{}", self.palette.term(), pasted);
        self.palette.set_term(&term);
        self.status = None;
    }
}
