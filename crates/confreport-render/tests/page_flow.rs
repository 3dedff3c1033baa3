use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use confreport_core::{
    ConferenceDate, ConferencePayload, DocketRecord, DocketSource, SourceError, Term, TermIndex,
};
use confreport_render::{CellContent, Outcome, RenderConfig, ReportController};
use confreport_sync::DirSource;
use tokio::sync::oneshot;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

#[tokio::test]
async fn two_terms_two_dockets_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "data/confdates.json",
        r#"{"terms": [
            {"term": 2018, "confdates": [{"y": 2018, "m": 10, "d": 5}]},
            {"term": 2019, "confdates": [{"y": 2019, "m": 2, "d": 15}]}
        ]}"#,
    );
    write(
        dir.path(),
        "data/conf/20190215.json",
        r#"{"conf-date": "February 15, 2019", "dockets": [
            {"docket-str": "2019-1001", "docket-url": "/d/2019-1001", "case-name": "Smith v. Jones",
             "qp": "Whether...", "case-type": "habeas", "current-status": "Pending",
             "dist-count": 2, "resch-count": 1, "dist-details": "2019-02-01<br>2019-02-15[R]"},
            {"docket-str": "2018-77", "case-name": "Doe v. Roe", "case-type": "foo",
             "tags": {"capital": true, "cvsg": true}, "flags": {"denied": true}}
        ]}"#,
    );

    let ctl = ReportController::new(DirSource::new(dir.path()), RenderConfig::default());
    assert_eq!(ctl.initialize().await.unwrap(), Outcome::Applied { rows: 2 });

    ctl.with_state(|s| {
        assert_eq!(s.selected_term, Some(2019));
        assert_eq!(s.selected_conference.as_deref(), Some("20190215"));
        let rows = s.table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].docket.search.as_deref(), Some("2019-1001"));
        assert_eq!(rows[1].docket.search.as_deref(), Some("2018-77"));
        assert_eq!(
            rows[0].case_name.content,
            CellContent::Collapsible {
                summary: "Smith v. Jones".into(),
                detail: vec!["Whether...".into()],
            }
        );
        assert_eq!(rows[1].case_name.content, CellContent::Text("Doe v. Roe".into()));
        assert_eq!(rows[1].tags.search.as_deref(), Some("capitalcvsg"));
        assert_eq!(rows[1].status.search.as_deref(), Some("denied"));
    })
    .await;

    let html = ctl.render_page().await;
    assert_eq!(html.matches("<tr class=").count() + html.matches("<tr><td").count(), 2);
    assert!(html.contains(r#"<option value="2019" id="confyears2019" data-href="OT2019.html" selected>"#));
    assert!(html.contains("Petitions considered for conference on February 15, 2019"));
    assert!(html.contains(r#"<i class="fas fa-hands" title="habeas"></i>"#));
    assert!(html.contains(r#"<i class="fas fa-question" title="foo"></i>"#));
    assert!(html.contains("<summary>2(1 Resch)</summary><pre>2019-02-01<br>2019-02-15[R]</pre>"));
}

/// Source whose responses for chosen keys are held until released.
#[derive(Default)]
struct GatedSource {
    index: TermIndex,
    conferences: HashMap<String, ConferencePayload>,
    gates: Mutex<HashMap<String, (oneshot::Sender<()>, oneshot::Receiver<()>)>>,
    index_fetches: AtomicUsize,
    conference_fetches: AtomicUsize,
}

impl GatedSource {
    /// Hold `key`. Returns a receiver that fires when the request arrives and
    /// a sender that releases it.
    fn hold(&self, key: &str) -> (oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (arrived_tx, arrived_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), (arrived_tx, release_rx));
        (arrived_rx, release_tx)
    }
}

#[async_trait]
impl DocketSource for GatedSource {
    async fn term_index(&self) -> Result<TermIndex, SourceError> {
        self.index_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.index.clone())
    }

    async fn conference(&self, key: &str) -> Result<ConferencePayload, SourceError> {
        self.conference_fetches.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(key);
        if let Some((arrived, release)) = gate {
            let _ = arrived.send(());
            let _ = release.await;
        }
        self.conferences
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}

fn payload(dockets: &[&str]) -> ConferencePayload {
    ConferencePayload {
        conference_date: None,
        dockets: dockets
            .iter()
            .map(|d| DocketRecord {
                docket_number: d.to_string(),
                ..Default::default()
            })
            .collect(),
    }
}

#[tokio::test]
async fn stale_response_never_overwrites_newer_selection() {
    let mut source = GatedSource {
        index: TermIndex {
            terms: vec![Term {
                term: 2019,
                conferences: vec![ConferenceDate::new(2019, 3, 1), ConferenceDate::new(2019, 2, 15)],
            }],
        },
        ..Default::default()
    };
    source
        .conferences
        .insert("20190301".into(), payload(&["2019-30", "2019-31"]));
    source
        .conferences
        .insert("20190215".into(), payload(&["2019-15"]));
    let source = Arc::new(source);
    let (arrived, release) = source.hold("20190301");

    let ctl = Arc::new(ReportController::new(source.clone(), RenderConfig::default()));

    // Slow request for 2019-3-1 is in flight...
    let slow = tokio::spawn({
        let ctl = ctl.clone();
        async move { ctl.select_conference("20190301").await }
    });
    arrived.await.unwrap();

    // ...when the user picks 2019-2-15, which answers immediately.
    assert_eq!(
        ctl.select_conference("20190215").await.unwrap(),
        Outcome::Applied { rows: 1 }
    );

    release.send(()).unwrap();
    assert_eq!(slow.await.unwrap().unwrap(), Outcome::Stale);

    ctl.with_state(|s| {
        assert_eq!(s.selected_conference.as_deref(), Some("20190215"));
        assert_eq!(s.table.len(), 1);
        assert_eq!(s.table.rows()[0].docket.search.as_deref(), Some("2019-15"));
        assert_eq!(s.table.draws(), 1);
    })
    .await;
}

#[tokio::test]
async fn every_selection_refetches() {
    let mut source = GatedSource {
        index: TermIndex {
            terms: vec![Term {
                term: 2019,
                conferences: vec![ConferenceDate::new(2019, 2, 15)],
            }],
        },
        ..Default::default()
    };
    source
        .conferences
        .insert("20190215".into(), payload(&["2019-1"]));
    let ctl = ReportController::new(source, RenderConfig::default());
    ctl.initialize().await.unwrap();
    ctl.select_conference("20190215").await.unwrap();
    ctl.select_conference("20190215").await.unwrap();
    assert_eq!(ctl.source().conference_fetches.load(Ordering::SeqCst), 3);
    assert_eq!(ctl.source().index_fetches.load(Ordering::SeqCst), 1);

    ctl.select_term(2019).await.unwrap();
    assert_eq!(ctl.source().index_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(ctl.source().conference_fetches.load(Ordering::SeqCst), 4);
    ctl.with_state(|s| {
        assert_eq!(s.table.len(), 1);
        assert_eq!(s.table.draws(), 4);
    })
    .await;
}
