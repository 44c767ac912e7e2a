use std::fmt;

use tracing::trace;

use crate::{Category, FeedbackTally};

type Listener = Box<dyn FnMut(&FeedbackTally)>;

/// Owner of a session's [`FeedbackTally`] that tells dependent views when
/// it changes.
///
/// Listeners run synchronously, in subscription order, once per successful
/// record. Ignored keys never notify.
#[derive(Default)]
pub struct TallyStore {
    tally: FeedbackTally,
    listeners: Vec<Listener>,
}

impl TallyStore {
    /// Creates a store with an all-zero tally and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tally
    pub fn tally(&self) -> &FeedbackTally {
        &self.tally
    }

    /// Registers `listener` to be called with the tally after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&FeedbackTally) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Records feedback for `category` and notifies listeners.
    pub fn record(&mut self, category: Category) {
        self.tally.record(category);
        self.notify();
    }

    /// Records feedback for the category named by `key`.
    ///
    /// Unknown keys are ignored and do not notify.
    pub fn record_key(&mut self, key: &str) -> Option<Category> {
        let category = self.tally.record_key(key)?;
        self.notify();
        Some(category)
    }

    fn notify(&mut self) {
        trace!(listeners = self.listeners.len(), "Notifying tally listeners");

        let tally = self.tally;
        for listener in self.listeners.iter_mut() {
            listener(&tally);
        }
    }
}

impl fmt::Debug for TallyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TallyStore")
            .field("tally", &self.tally)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
