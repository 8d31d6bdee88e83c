use crate::config::Config;
use crate::retry::RetryPolicy;
use crate::sink::ExportSink;
use crate::source::LeadSource;
use crate::view_model::{Action, LoadKind, Snapshot, ViewState, reduce};
use crate::Result;
use leadgen_engine::{EXPORT_FILE_NAME, SortKey, SortSpec, serialize};
use leadgen_types::LeadCollection;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardOptions {
    pub fetch_limit: usize,
    pub retry: RetryPolicy,
    pub export_file_name: String,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            fetch_limit: crate::config::DEFAULT_FETCH_LIMIT,
            retry: RetryPolicy::default(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl From<&Config> for BoardOptions {
    fn from(config: &Config) -> Self {
        Self {
            fetch_limit: config.fetch_limit,
            retry: RetryPolicy::from(&config.retry),
            export_file_name: config.export.file_name.clone(),
        }
    }
}

/// What the server said about a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub message: String,
    /// Leads the scan discovered, as counted by the server
    pub new_leads: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadOutcome {
    Loaded {
        kind: LoadKind,
        /// Leads in the new snapshot
        count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        scan: Option<ScanSummary>,
    },
    Failed {
        kind: LoadKind,
        message: String,
    },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Which rows an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    /// The filtered and sorted view, ranked as displayed
    #[default]
    Visible,
    /// The whole snapshot in the current sort order
    All,
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportScope::Visible => write!(f, "visible"),
            ExportScope::All => write!(f, "all"),
        }
    }
}

impl FromStr for ExportScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visible" => Ok(ExportScope::Visible),
            "all" => Ok(ExportScope::All),
            other => Err(format!("Unknown export scope: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExportOutcome {
    /// Nothing to export; the sink was not touched
    Skipped,
    Delivered { rows: usize, location: PathBuf },
}

/// Drives a [`ViewState`] from a data source.
///
/// Data-source failures never escape: they leave the previous snapshot in
/// place and surface as a notice on the state.
pub struct LeadBoard {
    source: Box<dyn LeadSource>,
    state: ViewState,
    options: BoardOptions,
}

impl LeadBoard {
    pub fn new(source: Box<dyn LeadSource>, options: BoardOptions) -> Self {
        Self {
            source,
            state: ViewState::default(),
            options,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(Action::SetQuery(query.into()));
    }

    pub fn select_sort_key(&mut self, key: SortKey) {
        self.dispatch(Action::SelectSortKey(key));
    }

    pub fn set_sort(&mut self, spec: SortSpec) {
        self.dispatch(Action::SetSort(spec));
    }

    /// Fetch the most recent leads and replace the snapshot.
    pub fn refresh(&mut self) -> LoadOutcome {
        let limit = self.options.fetch_limit;
        self.load(LoadKind::Refresh, |source| {
            source.fetch_leads(limit).map(|leads| (leads, None))
        })
    }

    /// Ask the source for a fresh scan and replace the snapshot with its result.
    pub fn trigger_scan(&mut self) -> LoadOutcome {
        self.load(LoadKind::Scan, |source| {
            source.trigger_scan().map(|report| {
                let summary = ScanSummary {
                    message: report.message,
                    new_leads: report.new_leads,
                };
                (report.leads, Some(summary))
            })
        })
    }

    /// Serialize the chosen rows and hand them to `sink`.
    pub fn export(&self, scope: ExportScope, sink: &dyn ExportSink) -> Result<ExportOutcome> {
        let rows = self.export_rows(scope);
        let Some(document) = serialize(&rows)? else {
            tracing::info!(scope = %scope, "nothing to export");
            return Ok(ExportOutcome::Skipped);
        };

        let location = sink.deliver(&self.options.export_file_name, &document)?;
        Ok(ExportOutcome::Delivered {
            rows: rows.len(),
            location,
        })
    }

    fn export_rows(&self, scope: ExportScope) -> LeadCollection {
        match scope {
            ExportScope::Visible => self.state.visible().clone(),
            ExportScope::All => {
                let sort = self.state.sort();
                leadgen_engine::sort(&self.state.snapshot().leads, sort.key, sort.direction)
            }
        }
    }

    fn load<F>(&mut self, kind: LoadKind, mut call: F) -> LoadOutcome
    where
        F: FnMut(&dyn LeadSource) -> Result<(LeadCollection, Option<ScanSummary>)>,
    {
        self.dispatch(Action::LoadStarted(kind));

        let source = self.source.as_ref();
        let label = kind.to_string();
        let result = self.options.retry.run(&label, || call(source));

        match result {
            Ok((leads, scan)) => {
                let count = leads.len();
                tracing::info!(source = source.id(), kind = %kind, count, "leads loaded");
                self.dispatch(Action::LoadSucceeded(Snapshot::received(leads, kind)));
                LoadOutcome::Loaded { kind, count, scan }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(source = source.id(), kind = %kind, error = %message, "load failed");
                self.dispatch(Action::LoadFailed {
                    kind,
                    message: message.clone(),
                });
                LoadOutcome::Failed { kind, message }
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ScanReport, StaticSource};
    use crate::{Error, Result};
    use leadgen_engine::SortDirection;
    use leadgen_types::{CompanyMeta, LeadId, LeadRecord, Person, PersonMeta};
    use std::cell::RefCell;
    use std::sync::Mutex;

    fn lead(id: &str, score: f64, name: &str) -> LeadRecord {
        LeadRecord {
            id: LeadId::from(id),
            score,
            person: Person {
                name: name.to_string(),
                title: "Head of Toxicology".to_string(),
                company: "Acme".to_string(),
                email: Some(format!("{}@acme.test", id)),
                location_person: "Boston, MA".to_string(),
                location_company: "Boston, MA".to_string(),
                linkedin_url: None,
                phone: None,
                avatar: None,
            },
            person_meta: PersonMeta::default(),
            company_meta: CompanyMeta::default(),
            rank_reasons: vec![],
        }
    }

    fn leads() -> LeadCollection {
        LeadCollection::new(vec![
            lead("a", 30.0, "Ann"),
            lead("b", 95.0, "Bea"),
            lead("c", 60.0, "Cal"),
        ])
        .unwrap()
    }

    /// Succeeds on the first fetch, fails on every call afterwards.
    struct OneShotSource {
        calls: Mutex<usize>,
    }

    impl LeadSource for OneShotSource {
        fn id(&self) -> &'static str {
            "one-shot"
        }

        fn fetch_leads(&self, _limit: usize) -> Result<LeadCollection> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            if *calls == 1 {
                Ok(leads())
            } else {
                Err(Error::HttpStatus {
                    status: 500,
                    body: "internal error".to_string(),
                })
            }
        }

        fn trigger_scan(&self) -> Result<ScanReport> {
            Err(Error::DataSource("Malformed scan response".to_string()))
        }
    }

    struct MemorySink {
        delivered: RefCell<Vec<(String, String)>>,
    }

    impl ExportSink for MemorySink {
        fn deliver(&self, file_name: &str, document: &str) -> Result<PathBuf> {
            self.delivered
                .borrow_mut()
                .push((file_name.to_string(), document.to_string()));
            Ok(PathBuf::from(file_name))
        }
    }

    fn board() -> LeadBoard {
        LeadBoard::new(
            Box::new(StaticSource::new(leads())),
            BoardOptions {
                retry: RetryPolicy::none(),
                ..BoardOptions::default()
            },
        )
    }

    #[test]
    fn test_refresh_loads_snapshot() {
        let mut board = board();
        let outcome = board.refresh();

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                kind: LoadKind::Refresh,
                count: 3,
                scan: None,
            }
        );
        let ids: Vec<&str> = board.state().visible().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(board.state().stats().high_probability, 1);
    }

    #[test]
    fn test_fetch_limit_is_passed_to_source() {
        let mut board = LeadBoard::new(
            Box::new(StaticSource::new(leads())),
            BoardOptions {
                fetch_limit: 2,
                retry: RetryPolicy::none(),
                ..BoardOptions::default()
            },
        );
        board.refresh();
        assert_eq!(board.state().stats().total, 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_view() {
        let mut board = LeadBoard::new(
            Box::new(OneShotSource {
                calls: Mutex::new(0),
            }),
            BoardOptions {
                retry: RetryPolicy::none(),
                ..BoardOptions::default()
            },
        );
        assert!(board.refresh().is_loaded());
        let before = board.state().visible().clone();

        let outcome = board.refresh();
        assert!(matches!(outcome, LoadOutcome::Failed { kind: LoadKind::Refresh, .. }));
        assert_eq!(board.state().visible(), &before);
        assert!(!board.state().is_loading());
        let notice = board.state().notice().unwrap();
        assert!(notice.message.contains("HTTP 500"));

        let outcome = board.trigger_scan();
        assert!(matches!(outcome, LoadOutcome::Failed { kind: LoadKind::Scan, .. }));
        assert_eq!(board.state().stats().total, 3);
    }

    #[test]
    fn test_scan_replaces_snapshot() {
        let scan = LeadCollection::new(vec![lead("z", 88.0, "Zed")]).unwrap();
        let mut board = LeadBoard::new(
            Box::new(StaticSource::new(leads()).with_scan(scan)),
            BoardOptions::default(),
        );
        board.refresh();
        board.set_query("ann");

        let outcome = board.trigger_scan();
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                kind: LoadKind::Scan,
                count: 1,
                scan: Some(ScanSummary {
                    message: "Scan complete".to_string(),
                    new_leads: 1,
                }),
            }
        );
        assert_eq!(board.state().stats().total, 1);
        assert_eq!(board.state().query(), "ann");
        assert!(board.state().visible().is_empty());
    }

    struct ReportingSource;

    impl LeadSource for ReportingSource {
        fn id(&self) -> &'static str {
            "reporting"
        }

        fn fetch_leads(&self, _limit: usize) -> Result<LeadCollection> {
            Ok(LeadCollection::empty())
        }

        fn trigger_scan(&self) -> Result<ScanReport> {
            Ok(ScanReport {
                message: "Found 1 new lead".to_string(),
                new_leads: 1,
                leads: leads(),
            })
        }
    }

    #[test]
    fn test_scan_outcome_carries_server_count() {
        let mut board = LeadBoard::new(Box::new(ReportingSource), BoardOptions::default());

        match board.trigger_scan() {
            LoadOutcome::Loaded {
                count,
                scan: Some(scan),
                ..
            } => {
                assert_eq!(count, 3);
                assert_eq!(scan.new_leads, 1);
                assert_eq!(scan.message, "Found 1 new lead");
            }
            other => panic!("expected a scan outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_export_visible_rows_in_view_order() {
        let mut board = board();
        board.refresh();
        board.select_sort_key(SortKey::Name);
        assert_eq!(
            board.state().sort(),
            SortSpec::new(SortKey::Name, SortDirection::Desc)
        );

        let sink = MemorySink {
            delivered: RefCell::new(vec![]),
        };
        let outcome = board.export(ExportScope::Visible, &sink).unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Delivered {
                rows: 3,
                location: PathBuf::from("qualified_leads.csv"),
            }
        );
        let delivered = sink.delivered.borrow();
        let lines: Vec<&str> = delivered[0].1.lines().collect();
        assert!(lines[1].starts_with("1,60,Cal,"));
        assert!(lines[3].starts_with("3,30,Ann,"));
    }

    #[test]
    fn test_export_all_ignores_query() {
        let mut board = board();
        board.refresh();
        board.set_query("bea");
        assert_eq!(board.state().visible().len(), 1);

        let sink = MemorySink {
            delivered: RefCell::new(vec![]),
        };
        let outcome = board.export(ExportScope::All, &sink).unwrap();
        assert!(matches!(outcome, ExportOutcome::Delivered { rows: 3, .. }));
    }

    #[test]
    fn test_export_of_empty_view_is_skipped() {
        let mut board = board();
        board.refresh();
        board.set_query("no such lead");

        let sink = MemorySink {
            delivered: RefCell::new(vec![]),
        };
        let outcome = board.export(ExportScope::Visible, &sink).unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_export_scope_parse() {
        assert_eq!("ALL".parse::<ExportScope>(), Ok(ExportScope::All));
        assert!("some".parse::<ExportScope>().is_err());
    }
}
