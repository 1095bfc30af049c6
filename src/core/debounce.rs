//! Timer-based coalescing of rapid inputs (search-as-you-type)
//!
//! Only the last value pushed within the window is published. Superseded
//! values are dropped, and a value is never published after a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;

/// Default debounce window for search input
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces bursts of values; observers see only the settled value
///
/// # Example
/// ```rust,ignore
/// let debouncer = Debouncer::new(Duration::from_millis(300));
/// let mut settled = debouncer.subscribe();
///
/// debouncer.push("p".to_string());
/// debouncer.push("phone".to_string());
///
/// settled.changed().await?;
/// assert_eq!(settled.borrow().as_deref(), Some("phone"));
/// ```
pub struct Debouncer<T> {
    window: Duration,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            window: self.window,
            generation: Arc::clone(&self.generation),
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(window: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Receiver notified each time a value settles
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.tx.subscribe()
    }

    /// The most recently published value
    pub fn latest(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    /// Schedule `value`; it is published after the window unless superseded
    ///
    /// Outside a Tokio runtime there is no timer, so the value is published
    /// immediately.
    pub fn push(&self, value: T) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no Tokio runtime, publishing debounced value immediately");
            self.flush(value);
            return;
        };

        let generation = Arc::clone(&self.generation);
        let tx = Arc::clone(&self.tx);
        let window = self.window;

        handle.spawn(async move {
            tokio::time::sleep(window).await;
            let published = tx.send_if_modified(|slot| {
                if generation.load(Ordering::SeqCst) == ticket {
                    *slot = Some(value);
                    true
                } else {
                    false
                }
            });
            if !published {
                tracing::trace!(ticket, "debounced value superseded");
            }
        });
    }

    /// Publish `value` now, discarding anything still pending
    pub fn flush(&self, value: T) {
        self.tx.send_modify(|slot| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *slot = Some(value);
        });
    }

    /// Drop anything still pending without publishing
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T> Default for Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
