//! Sort key derivation for docket numbers.
//!
//! Docket numbers are written `YEAR-SEQ` ("18-1234", "2019-1001"). The table
//! widget sorts the docket column numerically, so each docket is mapped to a
//! float whose integer part is the year and whose fraction is the sequence
//! zero-padded to five digits:
//!
//! - "2019-1001" → 2019.01001
//! - "2020-2"    → 2020.00002
//!
//! The mapping orders dockets by year, then sequence. Sequences above 99999
//! would collide with the next year and are rejected.

use std::fmt;

use crate::error::DocketNumberError;

const SEQ_WIDTH: usize = 5;
const SEQ_MAX: u32 = 99_999;

/// A parsed `YEAR-SEQ` docket number.
///
/// Field order gives the derived `Ord` the same ordering as the float key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocketNumber {
    pub year: u32,
    pub seq: u32,
}

impl DocketNumber {
    pub fn parse(raw: &str) -> Result<Self, DocketNumberError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(DocketNumberError::Empty);
        }

        let (year, seq) = s
            .split_once('-')
            .ok_or_else(|| DocketNumberError::MissingSeparator(raw.to_string()))?;

        let year = parse_digits(year).ok_or_else(|| DocketNumberError::BadYear(raw.to_string()))?;
        let seq =
            parse_digits(seq).ok_or_else(|| DocketNumberError::BadSequence(raw.to_string()))?;
        if seq > SEQ_MAX {
            return Err(DocketNumberError::SequenceOverflow(raw.to_string()));
        }

        Ok(Self { year, seq })
    }

    /// The numeric key handed to the table widget's `data-order`.
    pub fn sort_key(&self) -> f64 {
        // Parsed from the decimal text so the key equals the literal 2019.01001.
        self.order_text().parse().unwrap_or(self.year as f64)
    }

    /// The key in its textual `year.sssss` form.
    pub fn order_text(&self) -> String {
        format!("{}.{:0width$}", self.year, self.seq, width = SEQ_WIDTH)
    }
}

impl fmt::Display for DocketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.seq)
    }
}

/// Accept only non-empty runs of ASCII digits; `u32::from_str` would also
/// take a leading '+'.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert a list of inputs produces sort keys in strictly ascending order.
    fn assert_sorted_order(inputs: &[&str]) {
        let keys: Vec<f64> = inputs
            .iter()
            .map(|s| DocketNumber::parse(s).unwrap().sort_key())
            .collect();
        for i in 1..keys.len() {
            assert!(
                keys[i - 1] < keys[i],
                "Expected {:?} ({}) < {:?} ({})",
                inputs[i - 1],
                keys[i - 1],
                inputs[i],
                keys[i],
            );
        }
    }

    #[test]
    fn year_dominates_sequence() {
        assert_sorted_order(&["2019-1001", "2020-2"]);
    }

    #[test]
    fn sequence_order_within_year() {
        assert_sorted_order(&["18-1", "18-2", "18-10", "18-999", "18-1000", "18-99999"]);
    }

    #[test]
    fn two_digit_terms() {
        assert_sorted_order(&["17-9999", "18-1", "18-8010", "19-5"]);
    }

    #[test]
    fn exact_values() {
        let key = |s: &str| DocketNumber::parse(s).unwrap().sort_key();
        assert_eq!(key("2019-1001"), 2019.01001);
        assert_eq!(key("2020-2"), 2020.00002);
        assert_eq!(key("18-8010"), 18.0801);
    }

    #[test]
    fn order_text_is_zero_padded() {
        let n = DocketNumber::parse("18-42").unwrap();
        assert_eq!(n.order_text(), "18.00042");
        assert_eq!(n.to_string(), "18-42");
    }

    #[test]
    fn float_key_agrees_with_struct_order() {
        let mut parsed: Vec<DocketNumber> = ["20-3", "19-12000", "19-7", "20-1"]
            .iter()
            .map(|s| DocketNumber::parse(s).unwrap())
            .collect();
        parsed.sort();
        let keys: Vec<f64> = parsed.iter().map(|n| n.sort_key()).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn whitespace_trimmed() {
        assert_eq!(
            DocketNumber::parse("  18-5 ").unwrap(),
            DocketNumber { year: 18, seq: 5 }
        );
    }

    #[test]
    fn malformed_numbers_rejected() {
        assert_eq!(DocketNumber::parse(""), Err(DocketNumberError::Empty));
        assert!(matches!(
            DocketNumber::parse("22O141"),
            Err(DocketNumberError::MissingSeparator(_))
        ));
        assert!(matches!(
            DocketNumber::parse("A-12"),
            Err(DocketNumberError::BadYear(_))
        ));
        assert!(matches!(
            DocketNumber::parse("18A-12"),
            Err(DocketNumberError::BadYear(_))
        ));
        assert!(matches!(
            DocketNumber::parse("18-"),
            Err(DocketNumberError::BadSequence(_))
        ));
        assert!(matches!(
            DocketNumber::parse("18-+5"),
            Err(DocketNumberError::BadSequence(_))
        ));
        assert!(matches!(
            DocketNumber::parse("18-100000"),
            Err(DocketNumberError::SequenceOverflow(_))
        ));
    }
}
