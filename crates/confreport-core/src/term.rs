//! Terms and their conference dates, as published in `confdates.json`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level shape of `confdates.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermIndex {
    pub terms: Vec<Term>,
}

/// One court term and its conference dates, newest first as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term: i32,
    #[serde(rename = "confdates", default)]
    pub conferences: Vec<ConferenceDate>,
}

/// Calendar date of one conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConferenceDate {
    #[serde(rename = "y")]
    pub year: i32,
    #[serde(rename = "m")]
    pub month: u32,
    #[serde(rename = "d")]
    pub day: u32,
}

impl ConferenceDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Zero-padded `YYYYMMDD`; names the per-conference JSON file and is the
    /// option value in the conference selector.
    pub fn key(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// Unpadded `Y-M-D` option label.
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    /// Parse a `YYYYMMDD` key. Returns `None` unless it names a real date.
    pub fn parse_key(key: &str) -> Option<Self> {
        if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = key[..4].parse().ok()?;
        let month = key[4..6].parse().ok()?;
        let day = key[6..].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Long form used in page headings, e.g. "February 15, 2019".
    /// Falls back to the short label for impossible dates.
    pub fn long_form(&self) -> String {
        match self.to_naive_date() {
            Some(date) => date.format("%B %d, %Y").to_string(),
            None => self.label(),
        }
    }
}

impl From<NaiveDate> for ConferenceDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl Term {
    /// Find a conference of this term by its `YYYYMMDD` key.
    pub fn conference(&self, key: &str) -> Option<&ConferenceDate> {
        self.conferences.iter().find(|c| c.key() == key)
    }
}

impl TermIndex {
    pub fn term(&self, term: i32) -> Option<&Term> {
        self.terms.iter().find(|t| t.term == term)
    }

    /// The term that lists the conference with the given key.
    pub fn term_of_conference(&self, key: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.conference(key).is_some())
    }
}
