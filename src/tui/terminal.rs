//! Raw mode and alternate screen setup, undone on every exit path.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error};

/// Runs `restore` once: on [`RestoreGuard::finish`], or on drop if that
/// never happens (early `?` return or panic unwind).
pub struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and reports the outcome.
    pub fn finish(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(mut restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal from drop");
            if let Err(e) = restore() {
                error!(error = %e, "Failed to restore terminal");
            }
        }
    }
}

/// Switches the terminal into UI mode.
///
/// Raw mode is the first step, so the guard is armed as soon as it
/// succeeds; a failure entering the alternate screen still undoes it.
pub fn enter() -> io::Result<RestoreGuard<fn() -> io::Result<()>>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore as fn() -> io::Result<()>);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(guard)
}

/// Runs every restore step, even after a failure, and returns the first error.
fn restore() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture),
        execute!(io::stdout(), Show),
    ])
}

fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing(msg: &str) -> io::Result<()> {
        Err(io::Error::other(msg.to_string()))
    }

    #[test]
    fn test_finish_restores_once() {
        let calls = Cell::new(0);
        let guard = RestoreGuard::new(|| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        guard.finish().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_early_return_restores_on_drop() {
        let calls = Cell::new(0);
        let setup = || -> io::Result<()> {
            let _guard = RestoreGuard::new(|| {
                calls.set(calls.get() + 1);
                Ok(())
            });
            failing("alternate screen unavailable")?;
            Ok(())
        };
        assert!(setup().is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_finish_reports_restore_failure() {
        let guard = RestoreGuard::new(|| failing("disable raw mode"));
        let err = guard.finish().unwrap_err();
        assert_eq!(err.to_string(), "disable raw mode");
    }

    #[test]
    fn test_first_error_wins_after_all_steps() {
        let err = first_error([Ok(()), failing("first"), failing("second")]).unwrap_err();
        assert_eq!(err.to_string(), "first");
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}
