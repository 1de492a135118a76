//! Terminal viewport host
//!
//! Width is the terminal's reported pixel width; terminals that don't report
//! pixel sizes (and non-terminal environments) have no width. Resize
//! notifications come from crossterm's event stream on a background thread.

use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::terminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use super::classifier::ViewportHost;

/// The controlling terminal as a viewport host
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl ViewportHost for TerminalHost {
    fn width(&self) -> Option<u32> {
        match terminal::window_size() {
            Ok(size) if size.width > 0 => Some(u32::from(size.width)),
            _ => None,
        }
    }
}

/// A terminal resize notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub columns: u16,
    pub rows: u16,
}

/// Subscription to terminal resize notifications
///
/// Dropping the watcher unsubscribes: the polling thread notices within one
/// poll interval and exits.
pub struct ResizeWatcher {
    receiver: mpsc::Receiver<Resize>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ResizeWatcher {
    /// Start watching, polling the terminal every `poll_interval`
    pub fn new(poll_interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    match event::poll(poll_interval) {
                        Ok(true) => match event::read() {
                            Ok(CrosstermEvent::Resize(columns, rows)) => {
                                if sender.send(Resize { columns, rows }).is_err() {
                                    return;
                                }
                            }
                            Ok(_) => {}
                            Err(e) => {
                                tracing::warn!(error = %e, "failed to read terminal event");
                                return;
                            }
                        },
                        Ok(false) => {}
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to poll terminal events");
                            return;
                        }
                    }
                }
            })
        };

        Self {
            receiver,
            stop,
            handle: Some(handle),
        }
    }

    /// Wait for the next resize
    ///
    /// Errors once the polling thread has stopped.
    pub fn next(&self) -> Result<Resize, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for ResizeWatcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
