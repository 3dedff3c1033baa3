//! Option lists for the term and conference-date selection controls.

use crate::term::{Term, TermIndex};

/// One `<option>` of a selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The term with the greatest year identifier.
///
/// The published index is sorted newest first, but the maximum is recomputed
/// so input order does not matter. Equal identifiers resolve to the last one
/// seen, which is indistinguishable by value.
pub fn select_highest_term(terms: &[Term]) -> Option<&Term> {
    terms.iter().max_by_key(|t| t.term)
}

/// `(YYYYMMDD, "Y-M-D")` for every conference of `term`, in published order.
pub fn conference_options(term: &Term) -> Vec<SelectOption> {
    term.conferences
        .iter()
        .map(|c| SelectOption::new(c.key(), c.label()))
        .collect()
}

/// `(term, "OT<term>")` for every term, in published order.
pub fn term_options(index: &TermIndex) -> Vec<SelectOption> {
    index
        .terms
        .iter()
        .map(|t| SelectOption::new(t.term.to_string(), format!("OT{}", t.term)))
        .collect()
}
