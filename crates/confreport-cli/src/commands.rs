//! Subcommand implementations.

use std::path::Path;

use anyhow::Context;
use confreport_core::DocketSource;
use confreport_render::{RenderConfig, ReportController};
use confreport_sync::HttpSource;
use tracing::warn;

/// Print every term with its conference options; the default term is marked.
pub async fn terms<S: DocketSource>(source: S, config: RenderConfig) -> anyhow::Result<()> {
    let ctl = ReportController::new(source, config);
    if let Err(err) = ctl.initialize().await {
        // The index may have loaded even if the default conference did not.
        warn!(error = %err, "default conference unavailable");
    }
    let listing = ctl
        .with_state(|s| {
            let mut out = String::new();
            for term in &s.terms.terms {
                let marker = if s.selected_term == Some(term.term) {
                    " (default)"
                } else {
                    ""
                };
                out.push_str(&format!("OT{}{}\n", term.term, marker));
                for c in &term.conferences {
                    out.push_str(&format!("  {}  {}\n", c.key(), c.label()));
                }
            }
            out
        })
        .await;
    if listing.is_empty() {
        anyhow::bail!("no terms available");
    }
    print!("{listing}");
    Ok(())
}

/// Render one conference page to `out`, or stdout.
pub async fn render<S: DocketSource>(
    source: S,
    config: RenderConfig,
    date: Option<&str>,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let ctl = ReportController::new(source, config);
    let initialized = ctl.initialize().await;
    match date {
        Some(key) => {
            if let Err(err) = initialized {
                warn!(error = %err, "default conference unavailable");
            }
            ctl.select_conference(key)
                .await
                .with_context(|| format!("loading conference {key}"))?;
        }
        None => {
            initialized.context("loading the newest conference")?;
        }
    }

    let html = ctl.render_page().await;
    match out {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("  Wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

/// Write `index.html`, `OT<term>.html` per term and `<YYYYMMDD>.html` per
/// conference into `out`. Pages whose conference fails to load are skipped
/// and reported at the end; only a missing term index stops the build.
pub async fn build<S: DocketSource>(
    source: S,
    config: RenderConfig,
    out: &Path,
    all_terms: bool,
) -> anyhow::Result<()> {
    let ctl = ReportController::new(source, config);
    tokio::fs::create_dir_all(out)
        .await
        .with_context(|| format!("creating {}", out.display()))?;

    let mut written = 0usize;
    let mut failed: Vec<String> = Vec::new();

    match ctl.initialize().await {
        Ok(_) => {
            write_page(&ctl, &out.join("index.html")).await?;
            written += 1;
        }
        Err(err) => {
            let indexed = ctl.with_state(|s| s.selected_term.is_some()).await;
            if !indexed {
                return Err(err).context("loading the term index");
            }
            warn!(error = %err, "index page skipped");
            failed.push("index.html".to_string());
        }
    }

    let (all, default_term) = ctl
        .with_state(|s| {
            let all: Vec<i32> = s.terms.terms.iter().map(|t| t.term).collect();
            (all, s.selected_term)
        })
        .await;
    let wanted: Vec<i32> = if all_terms {
        all
    } else {
        default_term.into_iter().collect()
    };

    for term in wanted {
        match ctl.select_term(term).await {
            Ok(_) => {
                write_page(&ctl, &out.join(ctl.config().term_page(term))).await?;
                written += 1;
            }
            Err(err) => {
                warn!(term, error = %err, "term page skipped");
                failed.push(ctl.config().term_page(term));
            }
        }

        let keys = ctl
            .with_state(|s| {
                if s.selected_term != Some(term) {
                    return Vec::new();
                }
                s.conference_options
                    .iter()
                    .map(|o| o.value.clone())
                    .collect::<Vec<_>>()
            })
            .await;
        for key in keys {
            match ctl.select_conference(&key).await {
                Ok(_) => {
                    write_page(&ctl, &out.join(ctl.config().conference_page(&key))).await?;
                    written += 1;
                }
                Err(err) => {
                    warn!(conference = %key, error = %err, "conference page skipped");
                    failed.push(ctl.config().conference_page(&key));
                }
            }
        }
    }

    eprintln!("  Wrote {written} pages to {}", out.display());
    if !failed.is_empty() {
        anyhow::bail!(
            "{} page(s) could not be built: {}",
            failed.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

async fn write_page<S: DocketSource>(ctl: &ReportController<S>, path: &Path) -> anyhow::Result<()> {
    let html = ctl.render_page().await;
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("writing {}", path.display()))
}

/// Print a case document as pretty JSON.
pub async fn case(source: &HttpSource, term: i32, case_number: &str, qp: bool) -> anyhow::Result<()> {
    let doc = if qp {
        source.question_presented(term, case_number).await
    } else {
        source.case_data(term, case_number).await
    }
    .with_context(|| format!("fetching case {case_number} of term {term}"))?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
