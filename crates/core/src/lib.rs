pub mod config;
pub mod error;
pub mod highlight;
pub mod notes;
pub mod path_utils;
pub mod query;
pub mod search;
pub mod state;

pub use error::{PaletteError, Result};

use tracing::info;

pub fn init() {
    info!(notes = notes::all().len(), "note palette core initialized");
}
