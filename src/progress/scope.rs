use super::tracker::ProgressTracker;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

/// ProgressGuard - finishes the wrapped tracker when it goes out of scope
///
/// Whatever way the enclosing scope is left (normal return, early `?`
/// return, or a panic unwinding through it), the tracker is driven to its
/// total so the terminal is never left on an unterminated bar.
pub struct ProgressGuard<W: Write = Stdout> {
    tracker: ProgressTracker<W>,
}

impl<W: Write> ProgressGuard<W> {
    pub fn new(tracker: ProgressTracker<W>) -> Self {
        Self { tracker }
    }
}

impl<W: Write> Deref for ProgressGuard<W> {
    type Target = ProgressTracker<W>;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl<W: Write> DerefMut for ProgressGuard<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tracker
    }
}

impl<W: Write> Drop for ProgressGuard<W> {
    fn drop(&mut self) {
        self.tracker.finish();
    }
}

/// Runs `work` with a stdout tracker and finishes the bar afterwards
///
/// The value returned by `work` is handed back untouched, so an `Err` from
/// the enclosed work still reaches the caller. A panic inside `work` keeps
/// unwinding after the bar has been completed.
///
/// # Example
///
/// ```no_run
/// use prompt_ops::progress::track_progress;
///
/// let evaluated = track_progress(10, "Processing", |tracker| {
///     for _ in 0..10 {
///         tracker.update(None);
///     }
///     10
/// });
/// assert_eq!(evaluated, 10);
/// ```
pub fn track_progress<R, F>(total_steps: i64, description: &str, work: F) -> R
where
    F: FnOnce(&mut ProgressTracker<Stdout>) -> R,
{
    track_progress_with_writer(total_steps, description, io::stdout(), work)
}

/// Same as [`track_progress`] but draws on the given sink
pub fn track_progress_with_writer<W, R, F>(
    total_steps: i64,
    description: &str,
    writer: W,
    work: F,
) -> R
where
    W: Write,
    F: FnOnce(&mut ProgressTracker<W>) -> R,
{
    let mut guard = ProgressTracker::with_writer(total_steps, description, writer).finish_on_drop();
    work(&mut *guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_scope_finishes_on_normal_exit() {
        let mut buffer = Vec::new();
        let seen = track_progress_with_writer(5, "Work", &mut buffer, |tracker| {
            tracker.tick();
            tracker.tick();
            tracker.current_step()
        });
        assert_eq!(seen, 2);

        let out = String::from_utf8(buffer).unwrap();
        assert_eq!(out.matches('\r').count(), 3);
        assert!(out.ends_with("100% (5/5) | ETA: 0.0min\n"));
    }

    #[test]
    fn test_scope_does_not_redraw_when_already_complete() {
        let mut buffer = Vec::new();
        track_progress_with_writer(2, "Work", &mut buffer, |tracker| {
            tracker.tick();
            tracker.tick();
        });

        let out = String::from_utf8(buffer).unwrap();
        assert_eq!(out.matches('\r').count(), 2);
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_scope_propagates_error_after_finishing() {
        let mut buffer = Vec::new();
        let result: Result<(), String> =
            track_progress_with_writer(4, "Work", &mut buffer, |tracker| {
                tracker.tick();
                Err("evaluation failed".to_string())
            });
        assert_eq!(result.unwrap_err(), "evaluation failed");

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.ends_with("(4/4) | ETA: 0.0min\n"));
    }

    #[test]
    fn test_scope_finishes_on_panic_and_resumes_it() {
        let mut buffer = Vec::new();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            track_progress_with_writer::<_, (), _>(3, "Work", &mut buffer, |tracker| {
                tracker.tick();
                panic!("worker crashed");
            })
        }));

        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"worker crashed"));

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.ends_with("100% (3/3) | ETA: 0.0min\n"));
    }

    #[test]
    fn test_scope_with_zero_total_stays_silent() {
        let mut buffer = Vec::new();
        track_progress_with_writer(0, "Nothing", &mut buffer, |_tracker| {});
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_guard_finishes_on_drop() {
        let mut buffer = Vec::new();
        {
            let mut guard = ProgressTracker::with_writer(3, "Guarded", &mut buffer).finish_on_drop();
            guard.tick();
            assert_eq!(guard.current_step(), 1);
        }

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.ends_with("(3/3) | ETA: 0.0min\n"));
    }

    #[test]
    fn test_scope_respects_backwards_step() {
        let mut buffer = Vec::new();
        track_progress_with_writer(4, "Work", &mut buffer, |tracker| {
            tracker.set(4);
            tracker.set(1);
        });

        // the final check happens at scope exit, so the bar is completed again
        let out = String::from_utf8(buffer).unwrap();
        assert_eq!(out.matches('\n').count(), 2);
    }
}
