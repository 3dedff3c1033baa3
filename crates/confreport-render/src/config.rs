//! Render configuration: glyph tables, element ids, asset URLs, page links.
//!
//! One value is built per page controller and passed explicitly to every
//! rendering function.

use confreport_core::{CaseType, Tag};
use serde::{Deserialize, Serialize};

/// An icon class and its tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub class: String,
    pub title: String,
}

impl IconSpec {
    fn new(class: &str, title: &str) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
        }
    }
}

/// Icon classes for the case-type column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseTypeGlyphs {
    pub certiorari: String,
    pub habeas: String,
    pub original: String,
    pub prohibition: String,
    pub mandamus: String,
    /// Used for any unrecognised type.
    pub unknown: String,
}

impl CaseTypeGlyphs {
    pub fn class_for(&self, case_type: &CaseType) -> &str {
        match case_type {
            CaseType::Certiorari => &self.certiorari,
            CaseType::Habeas => &self.habeas,
            CaseType::Original => &self.original,
            CaseType::Prohibition => &self.prohibition,
            CaseType::Mandamus => &self.mandamus,
            CaseType::Other(_) => &self.unknown,
        }
    }
}

impl Default for CaseTypeGlyphs {
    fn default() -> Self {
        Self {
            certiorari: "fas fa-microscope".into(),
            habeas: "fas fa-hands".into(),
            original: "fas fa-balance-scale".into(),
            prohibition: "fas fa-ban".into(),
            mandamus: "fas fa-hand-point-right".into(),
            unknown: "fas fa-question".into(),
        }
    }
}

/// Icons for the tags column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagGlyphs {
    pub capital: IconSpec,
    pub related: IconSpec,
    pub cvsg: IconSpec,
    pub abuse: IconSpec,
}

impl TagGlyphs {
    pub fn get(&self, tag: Tag) -> &IconSpec {
        match tag {
            Tag::Capital => &self.capital,
            Tag::Related => &self.related,
            Tag::Cvsg => &self.cvsg,
            Tag::Abuse => &self.abuse,
        }
    }
}

impl Default for TagGlyphs {
    fn default() -> Self {
        Self {
            capital: IconSpec::new("fas fa-exclamation-triangle", "Capital"),
            related: IconSpec::new("fas fa-arrows-alt-h", "Related"),
            cvsg: IconSpec::new("fas fa-question-circle", "CVSG"),
            abuse: IconSpec::new("fas fa-user-slash", "Abuse"),
        }
    }
}

/// Stylesheets and scripts linked from the page head, in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            stylesheets: vec![
                "https://cdn.datatables.net/1.13.8/css/jquery.dataTables.min.css".into(),
                "https://use.fontawesome.com/releases/v5.15.4/css/all.css".into(),
                "https://cdnjs.cloudflare.com/ajax/libs/qtip2/3.0.3/jquery.qtip.min.css".into(),
            ],
            scripts: vec![
                "https://code.jquery.com/jquery-3.7.1.min.js".into(),
                "https://cdn.datatables.net/1.13.8/js/jquery.dataTables.min.js".into(),
                "https://cdnjs.cloudflare.com/ajax/libs/qtip2/3.0.3/jquery.qtip.min.js".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub title: String,
    pub table_id: String,
    pub term_select_id: String,
    pub conference_select_id: String,
    pub case_types: CaseTypeGlyphs,
    pub tags: TagGlyphs,
    /// Target of the CVSG tag icon; the icon is unlinked when `None`.
    pub cvsg_report_href: Option<String>,
    pub assets: Assets,
    /// Term pages are named `<prefix><term>.<ext>`.
    pub term_page_prefix: String,
    pub page_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Conference Report".into(),
            table_id: "conf".into(),
            term_select_id: "confyears".into(),
            conference_select_id: "confdates".into(),
            case_types: CaseTypeGlyphs::default(),
            tags: TagGlyphs::default(),
            cvsg_report_href: Some("/reports/cvsg.html".into()),
            assets: Assets::default(),
            term_page_prefix: "OT".into(),
            page_extension: "html".into(),
        }
    }
}

impl RenderConfig {
    /// File name of the page for one conference.
    pub fn conference_page(&self, key: &str) -> String {
        format!("{key}.{}", self.page_extension)
    }

    /// File name of the landing page of one term.
    pub fn term_page(&self, term: impl std::fmt::Display) -> String {
        format!("{}{term}.{}", self.term_page_prefix, self.page_extension)
    }
}
