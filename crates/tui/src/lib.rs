//! Note Palette TUI - the demo page with the search palette drawn over it.

use std::{io, time::Duration};

use crossterm::{
    cursor::Show,
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use notepalette_core::config::PaletteConfig;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

mod app;
mod ui;

pub use app::App;

pub fn run(config: &PaletteConfig) -> anyhow::Result<()> {
    let guard = TerminalGuard::enter()?;
    install_panic_hook(guard.enhanced);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(config);
    info!(enhanced = guard.enhanced, "palette ready");

    let res = run_app(&mut terminal, &mut app);
    let restored = guard.restore();
    res?;
    restored?;
    Ok(())
}

/// Owns raw mode and the alternate screen; dropping it puts the terminal back.
struct TerminalGuard {
    enhanced: bool,
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { enhanced: false, active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;

        // Lets Cmd/Super chords through on terminals that speak the kitty protocol.
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            guard.enhanced = true;
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        Ok(guard)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal(self.enhanced)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal(self.enhanced) {
                warn!(error = %e, "terminal restore failed");
            }
        }
    }
}

fn install_panic_hook(enhanced: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(enhanced);
        previous(info);
    }));
}

fn restore_terminal(enhanced: bool) -> io::Result<()> {
    run_all([
        &|| {
            if enhanced {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)
            } else {
                Ok(())
            }
        },
        &disable_raw_mode,
        &|| execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste),
        &|| execute!(io::stdout(), Show),
    ])
}

/// Runs every step even after a failure and reports the first error.
fn run_all<const N: usize>(steps: [&dyn Fn() -> io::Result<()>; N]) -> io::Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step() {
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn every_restore_step_runs_after_a_failure() {
        let ran = Cell::new(0);
        let result = run_all([
            &|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("pop failed"))
            },
            &|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("raw mode"))
            },
            &|| {
                ran.set(ran.get() + 1);
                Ok(())
            },
        ]);
        assert_eq!(ran.get(), 3);
        assert_eq!(result.unwrap_err().to_string(), "pop failed");
    }

    #[test]
    fn all_steps_succeeding_is_ok() {
        assert!(run_all([&|| Ok(()), &|| Ok(())]).is_ok());
    }
}
