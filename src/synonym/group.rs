//! Ordered synonym group.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::normalize::{is_multi_word, normalize_term};

/// An ordered set of normalized, mutually interchangeable terms.
///
/// Members keep the order in which they were supplied, after normalization,
/// with later duplicates dropped. A group is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    canonical: String,
    members: Vec<String>,
}

impl SynonymGroup {
    /// Build a group from raw terms, normalizing and deduplicating them.
    ///
    /// The first surviving term becomes the canonical member. Terms containing
    /// a double quote cannot be written as a phrase operand and are dropped.
    /// Returns `None` if no term survives.
    pub fn from_terms<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let members: Vec<String> = terms
            .into_iter()
            .map(|term| normalize_term(term.as_ref()))
            .filter(|term| !term.is_empty())
            .filter(|term| {
                let quoted = term.contains('"');
                if quoted {
                    warn!(term = %term, "Dropping synonym term containing a double quote");
                }
                !quoted
            })
            .filter(|term| seen.insert(term.clone()))
            .collect();

        let canonical = members.first()?.clone();
        Some(Self { canonical, members })
    }

    /// The canonical member of this group.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// All members in stored order, canonical included.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether a normalized term is a member of this group.
    pub fn contains(&self, term: &str) -> bool {
        self.members.iter().any(|member| member == term)
    }

    /// Render the group as a parenthesized `OR` disjunction.
    ///
    /// Multi-word members are wrapped in double quotes so each stays a single
    /// phrase operand.
    ///
    /// ```
    /// use synrewrite::synonym::SynonymGroup;
    ///
    /// let group = SynonymGroup::from_terms(["AirPods", "air pods"]).unwrap();
    /// assert_eq!(group.to_disjunction(), "(airpods OR \"air pods\")");
    /// ```
    pub fn to_disjunction(&self) -> String {
        let operands: Vec<String> = self
            .members
            .iter()
            .map(|member| {
                if is_multi_word(member) {
                    format!("\"{member}\"")
                } else {
                    member.clone()
                }
            })
            .collect();
        format!("({})", operands.join(" OR "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_normalizes_and_dedups() {
        let group = SynonymGroup::from_terms(["Phone", "TELEPHONE", "phone", " Мобильный "]).unwrap();
        assert_eq!(group.members(), &["phone", "telephone", "мобильный"]);
        assert_eq!(group.canonical(), "phone");
        assert_eq!(group.len(), 3);
        assert!(group.contains("telephone"));
        assert!(!group.contains("Telephone"));
    }

    #[test]
    fn test_group_drops_blank_terms() {
        let group = SynonymGroup::from_terms(["", "  ", "case"]).unwrap();
        assert_eq!(group.members(), &["case"]);
        assert_eq!(group.canonical(), "case");
    }

    #[test]
    fn test_empty_group_is_rejected() {
        assert!(SynonymGroup::from_terms(Vec::<String>::new()).is_none());
        assert!(SynonymGroup::from_terms([" ", "\t"]).is_none());
    }

    #[test]
    fn test_double_quoted_terms_are_dropped() {
        let group = SynonymGroup::from_terms(["12\" pizza", "large pizza", "pizza"]).unwrap();
        assert_eq!(group.canonical(), "large pizza");
        assert_eq!(
            group.to_disjunction(),
            "(\"large pizza\" OR pizza)"
        );

        assert!(SynonymGroup::from_terms(["55\""]).is_none());
    }

    #[test]
    fn test_disjunction() {
        let group = SynonymGroup::from_terms(["air pods", "airpods", "earbuds"]).unwrap();
        assert_eq!(
            group.to_disjunction(),
            "(\"air pods\" OR airpods OR earbuds)"
        );

        let single = SynonymGroup::from_terms(["solo"]).unwrap();
        assert_eq!(single.to_disjunction(), "(solo)");
    }
}
