//! Docket record → table row.
//!
//! Optional fields never fail a row: a missing question presented, lower
//! court detail, status or action only drops the matching detail, tooltip or
//! text. The docket number is the one required field; a record whose number
//! is not `YEAR-SEQ` is rejected and reported back to the caller.

use confreport_core::{CaseType, DocketNumberError, DocketRecord, Tag, TagSet};
use tracing::warn;

use crate::cell::{Cell, CellContent, DocketRow, Icon};
use crate::config::RenderConfig;

/// A record that could not be turned into a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub docket_number: String,
    pub error: DocketNumberError,
}

/// Rows for every valid record, in input order, plus the rejects.
#[derive(Debug, Clone, Default)]
pub struct RenderOutcome {
    pub rows: Vec<DocketRow>,
    pub rejected: Vec<RejectedRecord>,
}

pub fn render_rows(dockets: &[DocketRecord], config: &RenderConfig) -> RenderOutcome {
    let mut outcome = RenderOutcome::default();
    for record in dockets {
        match docket_row(record, config) {
            Ok(row) => outcome.rows.push(row),
            Err(error) => {
                warn!(docket = %record.docket_number, %error, "rejecting docket record");
                outcome.rejected.push(RejectedRecord {
                    docket_number: record.docket_number.clone(),
                    error,
                });
            }
        }
    }
    outcome
}

pub fn docket_row(record: &DocketRecord, config: &RenderConfig) -> Result<DocketRow, DocketNumberError> {
    let number = record.docket()?;

    Ok(DocketRow {
        class: status_class(record),
        docket: docket_cell(record).with_order(number.order_text()),
        case_type: case_type_cell(record, config),
        tags: tags_cell(&record.tag_set(), config),
        lower_court: lower_court_cell(record),
        case_name: case_name_cell(record),
        distribution: distribution_cell(record),
        action: action_cell(record),
        status: status_cell(record),
    })
}

fn docket_cell(record: &DocketRecord) -> Cell {
    let text = record.docket_number.trim().to_string();
    let content = match &record.link {
        Some(href) => CellContent::Link {
            href: href.clone(),
            text: text.clone(),
        },
        None => CellContent::Text(text.clone()),
    };
    Cell::new(content).with_search(text)
}

/// Icon from the fixed table. A known type's tooltip is the display label if
/// the payload gave one; an unknown type always shows its raw string.
pub fn case_type_cell(record: &DocketRecord, config: &RenderConfig) -> Cell {
    let case_type = record.case_type();
    let title = match (&case_type, &record.case_type) {
        (CaseType::Other(raw), _) => raw.clone(),
        (_, Some(t)) => t.text().to_string(),
        (_, None) => String::new(),
    };
    Cell::new(CellContent::Icons(vec![Icon {
        class: config.case_types.class_for(&case_type).to_string(),
        title,
        href: None,
    }]))
    .with_search(case_type.as_str())
}

/// Icons for set tags in fixed order; blank when none is set.
pub fn tags_cell(tags: &TagSet, config: &RenderConfig) -> Cell {
    if tags.is_empty() {
        return Cell::empty();
    }
    let icons = tags
        .active()
        .map(|tag| {
            let spec = config.tags.get(tag);
            let href = match tag {
                Tag::Cvsg => config.cvsg_report_href.clone(),
                _ => None,
            };
            Icon {
                class: spec.class.clone(),
                title: spec.title.clone(),
                href,
            }
        })
        .collect();
    Cell::new(CellContent::Icons(icons)).with_search(tags.search_text())
}

fn lower_court_cell(record: &DocketRecord) -> Cell {
    let Some(abbr) = record.lower_court.as_deref() else {
        return Cell::empty();
    };
    match record.lower_court_info.as_deref().map(split_lines) {
        Some(lines) if !lines.is_empty() => Cell::new(CellContent::WithTooltip {
            text: abbr.to_string(),
            tooltip: lines,
        }),
        _ => Cell::text(abbr),
    }
}

/// Plain case name, or a collapsible name/question pair when the question
/// presented is known.
pub fn case_name_cell(record: &DocketRecord) -> Cell {
    match record.qp.as_deref().map(str::trim) {
        Some(qp) if !qp.is_empty() => Cell::new(CellContent::Collapsible {
            summary: record.case_name.clone(),
            detail: vec![qp.to_string()],
        }),
        _ => Cell::text(record.case_name.clone()),
    }
}

/// Always collapsible: `<count>(<resch> Resch)` over the distribution list.
pub fn distribution_cell(record: &DocketRecord) -> Cell {
    let mut detail = Vec::new();
    if let Some(date) = &record.distributed_on {
        detail.push(format!("Distributed {}", date.label()));
    }
    if let Some(details) = record.distribution_details.as_deref() {
        detail.extend(split_lines(details));
    }
    Cell::new(CellContent::Collapsible {
        summary: format!(
            "{}({} Resch)",
            record.distribution_count, record.reschedule_count
        ),
        detail,
    })
    .with_order(record.distribution_count.to_string())
}

fn action_cell(record: &DocketRecord) -> Cell {
    match &record.conference_action {
        Some(action) => Cell::text(action.text()),
        None => Cell::empty(),
    }
}

/// Display label; the hidden search value is the run-together flag summary.
pub fn status_cell(record: &DocketRecord) -> Cell {
    let label = record
        .current_status
        .as_ref()
        .map(|s| s.text().to_string())
        .unwrap_or_default();
    let cell = Cell::text(label);
    let summary = record.flags.status.summary();
    if summary.is_empty() {
        cell
    } else {
        cell.with_search(summary)
    }
}

/// Row class: the status value as published. Inner whitespace is kept, so a
/// multi-word value yields several classes.
pub fn status_class(record: &DocketRecord) -> String {
    record
        .current_status
        .as_ref()
        .map(|status| status.value.trim().to_string())
        .unwrap_or_default()
}

/// Split backend text on `<br>` line breaks.
fn split_lines(s: &str) -> Vec<String> {
    s.replace("<br />", "<br>")
        .replace("<br/>", "<br>")
        .replace("<BR>", "<br>")
        .split("<br>")
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
