//! Markup for rows and the report page.

use confreport_core::SelectOption;

use crate::cell::{Cell, CellContent, Column, DocketRow, Icon};
use crate::config::RenderConfig;
use crate::table::DocketTable;
use crate::transform::RejectedRecord;

/// Everything the page template needs, borrowed from the controller state.
pub struct PageView<'a> {
    pub term_options: &'a [SelectOption],
    pub selected_term: Option<i32>,
    pub conference_options: &'a [SelectOption],
    pub selected_conference: Option<&'a str>,
    pub heading: Option<&'a str>,
    pub table: &'a DocketTable,
    pub rejected: &'a [RejectedRecord],
    pub failure: Option<&'a str>,
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn column_class(column: Column) -> &'static str {
    match column {
        Column::Docket => "docket-str",
        Column::Type => "case-type",
        Column::Tags => "tags",
        Column::LowerCourt => "lc-abbr",
        Column::Case => "case-name",
        Column::Distribution => "dist",
        Column::Action => "conf-action",
        Column::Status => "current-status",
    }
}

fn icon_html(icon: &Icon) -> String {
    let glyph = format!(
        r#"<i class="{}" title="{}"></i>"#,
        escape(&icon.class),
        escape(&icon.title)
    );
    match &icon.href {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, escape(href), glyph),
        None => glyph,
    }
}

fn lines_html(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| escape(l))
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn content_html(content: &CellContent) -> String {
    match content {
        CellContent::Empty => String::new(),
        CellContent::Text(text) => escape(text),
        CellContent::Link { href, text } => {
            format!(r#"<a href="{}">{}</a>"#, escape(href), escape(text))
        }
        CellContent::Icons(icons) => icons.iter().map(icon_html).collect(),
        CellContent::WithTooltip { text, tooltip } => format!(
            r#"<span class="has-tooltip">{}</span><div class="tooltiptext">{}</div>"#,
            escape(text),
            lines_html(tooltip)
        ),
        CellContent::Collapsible { summary, detail } if detail.is_empty() => {
            format!("<details><summary>{}</summary></details>", escape(summary))
        }
        CellContent::Collapsible { summary, detail } => format!(
            "<details><summary>{}</summary><pre>{}</pre></details>",
            escape(summary),
            lines_html(detail)
        ),
    }
}

pub fn cell_html(column: Column, cell: &Cell) -> String {
    let mut attrs = format!(r#" class="{}""#, column_class(column));
    if let Some(order) = &cell.order {
        attrs.push_str(&format!(r#" data-order="{}""#, escape(order)));
    }
    if let Some(search) = &cell.search {
        attrs.push_str(&format!(r#" data-search="{}""#, escape(search)));
    }
    format!("<td{}>{}</td>", attrs, content_html(&cell.content))
}

pub fn row_html(row: &DocketRow) -> String {
    let cells: String = Column::ALL
        .iter()
        .map(|&col| cell_html(col, row.cell(col)))
        .collect();
    if row.class.is_empty() {
        format!("<tr>{cells}</tr>")
    } else {
        format!(r#"<tr class="{}">{cells}</tr>"#, escape(&row.class))
    }
}

fn header_html() -> String {
    let cells: String = Column::ALL
        .iter()
        .map(|col| format!("<th>{}</th>", escape(col.title())))
        .collect();
    format!("<thead><tr>{cells}</tr></thead>")
}

fn select_html(
    id: &str,
    label: &str,
    options: &[SelectOption],
    selected: Option<&str>,
    href: impl Fn(&str) -> String,
) -> String {
    let mut out = format!(
        r#"<label for="{id}">{label}</label> <select id="{id}">"#,
        id = escape(id),
        label = escape(label)
    );
    for opt in options {
        let sel = if selected == Some(opt.value.as_str()) {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<option value="{v}" id="{id}{v}" data-href="{href}"{sel}>{label}</option>"#,
            v = escape(&opt.value),
            id = escape(id),
            href = escape(&href(&opt.value)),
            label = escape(&opt.label),
        ));
    }
    out.push_str("</select>");
    out
}

fn notices_html(view: &PageView<'_>) -> String {
    let mut out = String::new();
    if let Some(failure) = view.failure {
        out.push_str(&format!(
            r#"<div class="load-error" role="alert">Failed to load: {}</div>"#,
            escape(failure)
        ));
        out.push('\n');
    }
    if !view.rejected.is_empty() {
        out.push_str(&format!(
            r#"<div class="rejected-records"><p>{} docket record(s) could not be shown:</p><ul>"#,
            view.rejected.len()
        ));
        for r in view.rejected {
            let number = match r.docket_number.trim() {
                "" => "(no docket number)",
                n => n,
            };
            out.push_str(&format!(
                "<li>{}: {}</li>",
                escape(number),
                escape(&r.error.to_string())
            ));
        }
        out.push_str("</ul></div>\n");
    }
    out
}

/// The complete report page.
pub fn page_html(view: &PageView<'_>, config: &RenderConfig) -> String {
    let stylesheets: String = config
        .assets
        .stylesheets
        .iter()
        .map(|href| format!("  <link rel=\"stylesheet\" href=\"{}\"/>\n", escape(href)))
        .collect();
    let scripts: String = config
        .assets
        .scripts
        .iter()
        .map(|src| format!("  <script src=\"{}\"></script>\n", escape(src)))
        .collect();

    let selected_term = view.selected_term.map(|t| t.to_string());
    let term_select = select_html(
        &config.term_select_id,
        "Term",
        view.term_options,
        selected_term.as_deref(),
        |v| config.term_page(v),
    );
    let conference_select = select_html(
        &config.conference_select_id,
        "Conference",
        view.conference_options,
        view.selected_conference,
        |v| config.conference_page(v),
    );

    let heading = match view.heading {
        Some(h) => format!(
            "<h3>Petitions considered for conference on {}</h3>\n",
            escape(h)
        ),
        None => String::new(),
    };
    let title = match view.heading {
        Some(h) => format!("{} ({})", config.title, h),
        None => config.title.clone(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <title>{title}</title>
{stylesheets}  <style>
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ text-align: left; padding: 2px; }}
    .tooltiptext {{ display: none; }}
    .has-tooltip {{ border-bottom: 1px dotted black; }}
    .load-error {{ background-color: #ffcccc; padding: 6px; margin: 6px 0; }}
    tr.granted {{ background-color: #cceecc; }}
    tr.denied, tr.dismissed {{ background-color: #ffcccc; }}
  </style>
</head>
<body>
<h2>{h2}</h2>
<form class="selectors">{term_select} {conference_select}</form>
{heading}{notices}<table id="{table_id}" class="display">
{header}
{body}
</table>
{scripts}  <script>
  $(document).ready(function() {{
    $('#{table_id}').DataTable({{ ordering: true, order: [], paging: false, autoWidth: false }});
    $('.has-tooltip').each(function() {{
      $(this).qtip({{ content: {{ text: $(this).next('.tooltiptext') }} }});
    }});
    $('#{term_id}, #{conf_id}').change(function() {{
      var href = $(this).find(':selected').data('href');
      if (href) {{ window.location.href = href; }}
    }});
  }});
  </script>
</body>
</html>
"#,
        title = escape(&title),
        stylesheets = stylesheets,
        h2 = escape(&config.title),
        term_select = term_select,
        conference_select = conference_select,
        heading = heading,
        notices = notices_html(view),
        table_id = escape(&config.table_id),
        header = header_html(),
        body = view.table.draw(),
        scripts = scripts,
        term_id = escape(&config.term_select_id),
        conf_id = escape(&config.conference_select_id),
    )
}
