//! Page controller: owns the selector state and the table handle, and
//! applies fetched conferences to them.
//!
//! Every selection change takes a ticket from a generation counter before
//! fetching. A response is applied only if its ticket is still the newest
//! when it arrives; older responses are discarded, so a slow fetch for an
//! earlier selection can never overwrite a later one.

use std::sync::atomic::{AtomicU64, Ordering};

use confreport_core::source::{TERM_INDEX_PATH, conference_path};
use confreport_core::{
    ConferenceDate, DocketSource, SelectOption, SourceError, TermIndex, conference_options,
    select_highest_term, term_options,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::RenderConfig;
use crate::error::PageError;
use crate::html::{self, PageView};
use crate::table::DocketTable;
use crate::transform::{RejectedRecord, render_rows};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loaded,
    Failed {
        resource: String,
        message: String,
    },
}

/// What happened to the response of one selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied { rows: usize },
    /// A newer selection was made while this one was in flight.
    Stale,
}

#[derive(Debug, Default)]
pub struct PageState {
    pub terms: TermIndex,
    pub term_options: Vec<SelectOption>,
    pub selected_term: Option<i32>,
    pub conference_options: Vec<SelectOption>,
    pub selected_conference: Option<String>,
    pub heading: Option<String>,
    pub table: DocketTable,
    pub rejected: Vec<RejectedRecord>,
    pub load: LoadState,
}

impl PageState {
    /// Install a freshly fetched index with `term` selected. Returns the key
    /// of the term's first conference, which becomes the selected one.
    fn adopt_index(&mut self, index: TermIndex, term: i32) -> Option<String> {
        self.term_options = term_options(&index);
        self.conference_options = index.term(term).map(conference_options).unwrap_or_default();
        self.terms = index;
        self.selected_term = Some(term);
        self.selected_conference = self.conference_options.first().map(|o| o.value.clone());
        self.selected_conference.clone()
    }

    /// Record a conference selection, following it to its term if the
    /// index places it in a different one.
    fn select_conference(&mut self, key: &str) {
        self.selected_conference = Some(key.to_string());
        let owner = self
            .terms
            .term_of_conference(key)
            .map(|t| (t.term, conference_options(t)));
        if let Some((term, options)) = owner
            && self.selected_term != Some(term)
        {
            self.selected_term = Some(term);
            self.conference_options = options;
        }
    }

    fn failure_text(&self) -> Option<String> {
        match &self.load {
            LoadState::Failed { resource, message } => Some(format!("{resource} ({message})")),
            _ => None,
        }
    }
}

pub struct ReportController<S> {
    source: S,
    config: RenderConfig,
    generation: AtomicU64,
    state: Mutex<PageState>,
}

impl<S: DocketSource> ReportController<S> {
    pub fn new(source: S, config: RenderConfig) -> Self {
        Self {
            source,
            config,
            generation: AtomicU64::new(0),
            state: Mutex::new(PageState::default()),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Page load: fetch the term index, select the highest term and show its
    /// first conference.
    pub async fn initialize(&self) -> Result<Outcome, PageError> {
        self.load_term(None).await
    }

    /// Term selector change. The index is fetched again, not reused.
    pub async fn select_term(&self, term: i32) -> Result<Outcome, PageError> {
        self.load_term(Some(term)).await
    }

    /// Conference selector change, by `YYYYMMDD` key.
    pub async fn select_conference(&self, key: &str) -> Result<Outcome, PageError> {
        let date = ConferenceDate::parse_key(key)
            .ok_or_else(|| PageError::BadConferenceKey(key.to_string()))?;
        let ticket = self.begin();
        if !self.mark_selected(ticket, key).await {
            debug!(conference = %key, ticket, "selection superseded before fetch");
            return Ok(Outcome::Stale);
        }
        self.load_conference(ticket, date.key()).await
    }

    /// Record the selection only while `ticket` is still the newest.
    async fn mark_selected(&self, ticket: u64, key: &str) -> bool {
        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            return false;
        }
        state.select_conference(key);
        true
    }

    async fn load_term(&self, wanted: Option<i32>) -> Result<Outcome, PageError> {
        let ticket = self.begin();
        let index = match self.source.term_index().await {
            Ok(index) => index,
            Err(err) => return Err(self.fail(ticket, TERM_INDEX_PATH, err).await),
        };

        let term = match wanted {
            Some(t) => index.term(t).ok_or(PageError::UnknownTerm(t))?.term,
            None => select_highest_term(&index.terms).ok_or(PageError::NoTerms)?.term,
        };

        let first = {
            let mut state = self.state.lock().await;
            if !self.is_current(ticket) {
                debug!(ticket, "discarding stale term index");
                return Ok(Outcome::Stale);
            }
            info!(term, terms = index.terms.len(), "term selected");
            state.adopt_index(index, term)
        };

        match first {
            Some(key) => self.load_conference(ticket, key).await,
            None => {
                let mut state = self.state.lock().await;
                if !self.is_current(ticket) {
                    return Ok(Outcome::Stale);
                }
                state.table.replace(Vec::new());
                state.rejected.clear();
                state.heading = None;
                state.load = LoadState::Loaded;
                Ok(Outcome::Applied { rows: 0 })
            }
        }
    }

    async fn load_conference(&self, ticket: u64, key: String) -> Result<Outcome, PageError> {
        let payload = match self.source.conference(&key).await {
            Ok(payload) => payload,
            Err(err) => return Err(self.fail(ticket, &conference_path(&key), err).await),
        };
        let rendered = render_rows(&payload.dockets, &self.config);

        let mut state = self.state.lock().await;
        if !self.is_current(ticket) {
            debug!(conference = %key, ticket, "discarding stale conference response");
            return Ok(Outcome::Stale);
        }

        let rows = rendered.rows.len();
        state.table.replace(rendered.rows);
        state.rejected = rendered.rejected;
        state.heading = payload
            .conference_date
            .or_else(|| ConferenceDate::parse_key(&key).map(|d| d.long_form()));
        state.load = LoadState::Loaded;
        info!(conference = %key, rows, rejected = state.rejected.len(), "table updated");
        Ok(Outcome::Applied { rows })
    }

    /// Surface a failed fetch. The table keeps its rows; the page shows the
    /// failure unless a newer selection has already superseded this one.
    async fn fail(&self, ticket: u64, resource: &str, err: SourceError) -> PageError {
        warn!(resource, error = %err, "load failed");
        let mut state = self.state.lock().await;
        if self.is_current(ticket) {
            state.load = LoadState::Failed {
                resource: resource.to_string(),
                message: err.to_string(),
            };
        }
        PageError::Source(err)
    }

    /// Read the current state under the lock.
    pub async fn with_state<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    /// Markup of the page as it stands.
    pub async fn render_page(&self) -> String {
        let state = self.state.lock().await;
        let failure = state.failure_text();
        let view = PageView {
            term_options: &state.term_options,
            selected_term: state.selected_term,
            conference_options: &state.conference_options,
            selected_conference: state.selected_conference.as_deref(),
            heading: state.heading.as_deref(),
            table: &state.table,
            rejected: &state.rejected,
            failure: failure.as_deref(),
        };
        html::page_html(&view, &self.config)
    }
}
