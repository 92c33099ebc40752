//! Synonym data: groups, raw sources, and the lookup dictionary.
//!
//! This module provides the building blocks the rewriter resolves against:
//! - Raw source parsing (list-of-groups or canonical-map JSON)
//! - Ordered, normalized synonym groups
//! - The immutable dictionary and its hot-swappable handle

pub mod dictionary;
pub mod group;
pub mod shared;
pub mod source;

pub use dictionary::{DictionaryStats, GroupId, SynonymDictionary};
pub use group::SynonymGroup;
pub use shared::SharedDictionary;
pub use source::RawSynonyms;
