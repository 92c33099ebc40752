//! Hot-swappable handle to an immutable dictionary.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::dictionary::SynonymDictionary;

/// A shareable reference to the current [`SynonymDictionary`].
///
/// Readers take a snapshot (`Arc`) and use it for the whole call. A reload
/// installs a dictionary that was fully built beforehand; snapshots already
/// handed out keep pointing at the old one.
#[derive(Debug, Clone)]
pub struct SharedDictionary {
    current: Arc<RwLock<Arc<SynonymDictionary>>>,
}

impl SharedDictionary {
    /// Wrap a built dictionary.
    pub fn new(dictionary: SynonymDictionary) -> Self {
        Self::from_arc(Arc::new(dictionary))
    }

    /// Wrap a dictionary that is already reference counted.
    pub fn from_arc(dictionary: Arc<SynonymDictionary>) -> Self {
        SharedDictionary {
            current: Arc::new(RwLock::new(dictionary)),
        }
    }

    /// Get the dictionary visible to new calls.
    pub fn snapshot(&self) -> Arc<SynonymDictionary> {
        Arc::clone(&*self.current.read())
    }

    /// Replace the dictionary, returning the previous one.
    pub fn swap(&self, dictionary: SynonymDictionary) -> Arc<SynonymDictionary> {
        let replacement = Arc::new(dictionary);
        let stats = replacement.stats().clone();
        let previous = std::mem::replace(&mut *self.current.write(), replacement);
        info!(
            groups = stats.groups,
            terms = stats.terms,
            "Synonym dictionary swapped"
        );
        previous
    }
}

impl From<SynonymDictionary> for SharedDictionary {
    fn from(dictionary: SynonymDictionary) -> Self {
        SharedDictionary::new(dictionary)
    }
}

impl Default for SharedDictionary {
    fn default() -> Self {
        SharedDictionary::new(SynonymDictionary::new())
    }
}
