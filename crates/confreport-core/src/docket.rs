//! Docket records as published in `conf/<YYYYMMDD>.json`.
//!
//! Field names follow the published kebab-case JSON (`docket-str`,
//! `case-name`, ...); the camelCase spellings are accepted as aliases.
//! Type, action, status and tags may each be given bare or as a
//! `{value, display}` pair. A `null` in a scalar field reads as its default.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DocketNumberError;
use crate::sort_key::DocketNumber;
use crate::term::ConferenceDate;

/// Top-level shape of a per-conference document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConferencePayload {
    /// Human-readable conference date, e.g. "February 15, 2019".
    #[serde(rename = "conf-date", alias = "confDate", default, skip_serializing_if = "Option::is_none")]
    pub conference_date: Option<String>,
    #[serde(default)]
    pub dockets: Vec<DocketRecord>,
}

/// A value with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "LabeledRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Labeled<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabeledRepr<T> {
    Pair {
        value: T,
        #[serde(default)]
        display: Option<String>,
    },
    Bare(T),
}

impl<T> From<LabeledRepr<T>> for Labeled<T> {
    fn from(repr: LabeledRepr<T>) -> Self {
        match repr {
            LabeledRepr::Pair { value, display } => Labeled { value, display },
            LabeledRepr::Bare(value) => Labeled {
                value,
                display: None,
            },
        }
    }
}

impl<T> Labeled<T> {
    pub fn bare(value: T) -> Self {
        Self {
            value,
            display: None,
        }
    }

    pub fn with_display(value: T, display: impl Into<String>) -> Self {
        Self {
            value,
            display: Some(display.into()),
        }
    }
}

impl Labeled<String> {
    /// The display label, falling back to the raw value.
    pub fn text(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.value)
    }
}

/// One case pending conference action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocketRecord {
    /// Raw docket text. Absent or non-string values are kept as text and
    /// rejected when the row is built, not when the payload is read.
    #[serde(
        rename = "docket-str",
        alias = "docketNumber",
        default,
        deserialize_with = "docket_text"
    )]
    pub docket_number: String,
    #[serde(rename = "docket-url", alias = "link", default)]
    pub link: Option<String>,
    #[serde(rename = "case-type", alias = "caseType", default)]
    pub case_type: Option<Labeled<String>>,
    #[serde(rename = "case-name", alias = "caseName", default, deserialize_with = "null_as_default")]
    pub case_name: String,
    /// Question presented.
    #[serde(default)]
    pub qp: Option<String>,
    #[serde(rename = "lc-abbr", alias = "lowerCourtAbbreviation", default)]
    pub lower_court: Option<String>,
    #[serde(rename = "lc-info", alias = "lowerCourtInfo", default)]
    pub lower_court_info: Option<String>,
    #[serde(
        rename = "dist-count",
        alias = "distributionCount",
        default,
        deserialize_with = "null_as_default"
    )]
    pub distribution_count: u32,
    #[serde(
        rename = "resch-count",
        alias = "rescheduleCount",
        default,
        deserialize_with = "null_as_default"
    )]
    pub reschedule_count: u32,
    #[serde(rename = "dist-details", alias = "distributionDetails", default)]
    pub distribution_details: Option<String>,
    #[serde(rename = "dist-date", alias = "distributionDate", default)]
    pub distributed_on: Option<ConferenceDate>,
    #[serde(rename = "conf-action", alias = "conferenceAction", default)]
    pub conference_action: Option<Labeled<String>>,
    #[serde(rename = "current-status", alias = "currentStatus", default)]
    pub current_status: Option<Labeled<String>>,
    #[serde(default)]
    pub tags: Option<Labeled<TagSet>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: RecordFlags,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn docket_text<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(de)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

impl DocketRecord {
    pub fn docket(&self) -> Result<DocketNumber, DocketNumberError> {
        DocketNumber::parse(&self.docket_number)
    }

    pub fn case_type(&self) -> CaseType {
        self.case_type
            .as_ref()
            .map(|t| CaseType::parse(&t.value))
            .unwrap_or(CaseType::Other(String::new()))
    }

    /// Tags from the `tags` field, else the tag keys carried in `flags`.
    pub fn tag_set(&self) -> TagSet {
        self.tags.as_ref().map(|t| t.value).unwrap_or(self.flags.tags)
    }
}

/// Procedural vehicle of a case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaseType {
    Certiorari,
    Habeas,
    Original,
    Prohibition,
    Mandamus,
    /// Anything else, carrying the raw string.
    Other(String),
}

impl CaseType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "certiorari" => Self::Certiorari,
            "habeas" => Self::Habeas,
            "original" => Self::Original,
            "prohibition" => Self::Prohibition,
            "mandamus" => Self::Mandamus,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Certiorari => "certiorari",
            Self::Habeas => "habeas",
            Self::Original => "original",
            Self::Prohibition => "prohibition",
            Self::Mandamus => "mandamus",
            Self::Other(raw) => raw,
        }
    }
}

/// Annotation tags shown as icons in the tags column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Capital,
    Related,
    Cvsg,
    Abuse,
}

impl Tag {
    /// Fixed rendering order.
    pub const ALL: [Tag; 4] = [Tag::Capital, Tag::Related, Tag::Cvsg, Tag::Abuse];

    /// Lowercase search token.
    pub fn token(self) -> &'static str {
        match self {
            Tag::Capital => "capital",
            Tag::Related => "related",
            Tag::Cvsg => "cvsg",
            Tag::Abuse => "abuse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSet {
    pub capital: bool,
    pub related: bool,
    pub cvsg: bool,
    pub abuse: bool,
}

impl TagSet {
    pub fn contains(&self, tag: Tag) -> bool {
        match tag {
            Tag::Capital => self.capital,
            Tag::Related => self.related,
            Tag::Cvsg => self.cvsg,
            Tag::Abuse => self.abuse,
        }
    }

    /// Set tags in fixed order.
    pub fn active(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.into_iter().filter(|t| self.contains(*t))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Set tags' tokens concatenated without separator, e.g. "capitalcvsg".
    pub fn search_text(&self) -> String {
        self.active().map(Tag::token).collect()
    }
}

/// The record's `flags` object, which carries status flags and may also
/// carry the tag booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFlags {
    #[serde(flatten)]
    pub status: StatusFlags,
    #[serde(flatten)]
    pub tags: TagSet,
}

/// Disposition flags summarised in the status column's search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFlag {
    Issued,
    Granted,
    Dismissed,
    Remanded,
    Denied,
    Argued,
    Removed,
}

impl StatusFlag {
    /// Fixed check order.
    pub const ALL: [StatusFlag; 7] = [
        StatusFlag::Issued,
        StatusFlag::Granted,
        StatusFlag::Dismissed,
        StatusFlag::Remanded,
        StatusFlag::Denied,
        StatusFlag::Argued,
        StatusFlag::Removed,
    ];

    pub fn token(self) -> &'static str {
        match self {
            StatusFlag::Issued => "issued",
            StatusFlag::Granted => "granted",
            StatusFlag::Dismissed => "dismissed",
            StatusFlag::Remanded => "remanded",
            StatusFlag::Denied => "denied",
            StatusFlag::Argued => "argued",
            StatusFlag::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusFlags {
    pub issued: bool,
    pub granted: bool,
    pub dismissed: bool,
    pub remanded: bool,
    pub denied: bool,
    pub argued: bool,
    pub removed: bool,
}

impl StatusFlags {
    pub fn contains(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Issued => self.issued,
            StatusFlag::Granted => self.granted,
            StatusFlag::Dismissed => self.dismissed,
            StatusFlag::Remanded => self.remanded,
            StatusFlag::Denied => self.denied,
            StatusFlag::Argued => self.argued,
            StatusFlag::Removed => self.removed,
        }
    }

    /// Set flags' tokens concatenated in check order with no separator.
    /// Adjacent tokens run together ("granteddenied").
    pub fn summary(&self) -> String {
        StatusFlag::ALL
            .into_iter()
            .filter(|f| self.contains(*f))
            .map(StatusFlag::token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_record() {
        let json = r#"{
            "docket-str": "18-1234",
            "docket-url": "https://example.test/18-1234.html",
            "case-name": "Smith v. Jones",
            "case-type": "certiorari",
            "current-status": "Pending",
            "conf-action": "DISTRIBUTED",
            "dist-count": 3,
            "resch-count": 1,
            "dist-details": "2019-01-11<br>2019-01-18[R]",
            "lc-abbr": "CA9",
            "lc-info": "Court of Appeals<br>17-555 - 2018-06-01",
            "flags": {"granted": true},
            "dist-date": {"y": 2018, "m": 12, "d": 26}
        }"#;
        let rec: DocketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.docket_number, "18-1234");
        assert_eq!(rec.case_type(), CaseType::Certiorari);
        assert_eq!(rec.current_status.as_ref().unwrap().text(), "Pending");
        assert_eq!(rec.distribution_count, 3);
        assert!(rec.flags.status.granted);
        assert!(rec.qp.is_none());
        assert!(rec.tag_set().is_empty());
        assert_eq!(rec.distributed_on, Some(ConferenceDate::new(2018, 12, 26)));
    }

    #[test]
    fn camel_case_record_with_labeled_fields() {
        let json = r#"{
            "docketNumber": "2019-1001",
            "link": "/dockets/2019-1001",
            "caseName": "In re Doe",
            "caseType": {"value": "mandamus", "display": "Mandamus"},
            "currentStatus": {"value": "status-granted", "display": "Granted"},
            "conferenceAction": {"value": "GVR"},
            "tags": {"value": {"capital": true, "abuse": true}, "display": "capital, abuse"},
            "qp": "Whether..."
        }"#;
        let rec: DocketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.case_type(), CaseType::Mandamus);
        let status = rec.current_status.as_ref().unwrap();
        assert_eq!(status.value, "status-granted");
        assert_eq!(status.text(), "Granted");
        assert_eq!(rec.conference_action.as_ref().unwrap().text(), "GVR");
        assert_eq!(rec.tag_set().search_text(), "capitalabuse");
        assert_eq!(rec.docket().unwrap(), DocketNumber { year: 2019, seq: 1001 });
    }

    #[test]
    fn bare_tag_map() {
        let rec: DocketRecord =
            serde_json::from_str(r#"{"docket-str": "18-1", "tags": {"related": true}}"#).unwrap();
        assert_eq!(rec.tag_set().active().collect::<Vec<_>>(), vec![Tag::Related]);
    }

    #[test]
    fn null_optionals_degrade() {
        let rec: DocketRecord =
            serde_json::from_str(r#"{"docket-str": "18-1", "qp": null, "lc-info": null}"#)
                .unwrap();
        assert!(rec.qp.is_none());
        assert!(rec.lower_court_info.is_none());
        assert_eq!(rec.case_type(), CaseType::Other(String::new()));
    }

    #[test]
    fn unknown_case_type_keeps_raw_string() {
        assert_eq!(CaseType::parse("foo"), CaseType::Other("foo".into()));
        assert_eq!(CaseType::parse("foo").as_str(), "foo");
        assert_eq!(CaseType::parse("habeas").as_str(), "habeas");
    }

    #[test]
    fn tags_in_fixed_order() {
        let tags = TagSet {
            abuse: true,
            capital: true,
            cvsg: true,
            related: false,
        };
        assert_eq!(
            tags.active().collect::<Vec<_>>(),
            vec![Tag::Capital, Tag::Cvsg, Tag::Abuse]
        );
        assert_eq!(tags.search_text(), "capitalcvsgabuse");
    }

    #[test]
    fn flag_summary_runs_together() {
        let flags = StatusFlags {
            denied: true,
            granted: true,
            removed: true,
            ..Default::default()
        };
        assert_eq!(flags.summary(), "granteddeniedremoved");
        assert_eq!(StatusFlags::default().summary(), "");
    }

    #[test]
    fn tags_read_from_flags_object() {
        let rec: DocketRecord = serde_json::from_str(
            r#"{"docket-str": "18-1", "flags": {"capital": true, "cvsg": true, "granted": true}}"#,
        )
        .unwrap();
        assert_eq!(
            rec.tag_set().active().collect::<Vec<_>>(),
            vec![Tag::Capital, Tag::Cvsg]
        );
        assert_eq!(rec.flags.status.summary(), "granted");
    }

    #[test]
    fn explicit_tags_win_over_flags() {
        let rec: DocketRecord = serde_json::from_str(
            r#"{"docket-str": "18-1", "tags": {"abuse": true}, "flags": {"capital": true}}"#,
        )
        .unwrap();
        assert_eq!(rec.tag_set().active().collect::<Vec<_>>(), vec![Tag::Abuse]);
    }

    #[test]
    fn null_scalars_read_as_defaults() {
        let rec: DocketRecord = serde_json::from_str(
            r#"{"docket-str": "18-1", "case-name": null, "dist-count": null, "resch-count": null, "flags": null}"#,
        )
        .unwrap();
        assert_eq!(rec.case_name, "");
        assert_eq!(rec.distribution_count, 0);
        assert_eq!(rec.reschedule_count, 0);
        assert_eq!(rec.flags, RecordFlags::default());
    }

    #[test]
    fn missing_or_odd_docket_number_still_parses() {
        let json = r#"{"dockets": [
            {"docket-str": "18-1"},
            {"case-name": "No Number v. X"},
            {"docket-str": null},
            {"docket-str": 181},
            {"docket-str": "18-2"}
        ]}"#;
        let payload: ConferencePayload = serde_json::from_str(json).unwrap();
        let numbers: Vec<&str> = payload.dockets.iter().map(|d| d.docket_number.as_str()).collect();
        assert_eq!(numbers, ["18-1", "", "", "181", "18-2"]);
        assert_eq!(payload.dockets[1].docket(), Err(DocketNumberError::Empty));
        assert!(matches!(
            payload.dockets[3].docket(),
            Err(DocketNumberError::MissingSeparator(_))
        ));
    }

    #[test]
    fn payload_with_heading() {
        let json = r#"{"conf-date": "February 15, 2019", "dockets": [{"docket-str": "18-1"}]}"#;
        let payload: ConferencePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.conference_date.as_deref(), Some("February 15, 2019"));
        assert_eq!(payload.dockets.len(), 1);
    }
}
