use chrono::{DateTime, Utc};
use leadgen_engine::{LeadStats, SortDirection, SortKey, SortSpec, aggregate, derive_view};
use leadgen_types::LeadCollection;
use serde::Serialize;
use std::fmt;

/// Which request produced (or failed to produce) a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    Refresh,
    Scan,
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadKind::Refresh => write!(f, "refresh"),
            LoadKind::Scan => write!(f, "scan"),
        }
    }
}

/// Raw lead list as last received from the data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub leads: LeadCollection,
    pub origin: Option<LoadKind>,
    pub received_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn received(leads: LeadCollection, origin: LoadKind) -> Self {
        Self {
            leads,
            origin: Some(origin),
            received_at: Some(Utc::now()),
        }
    }
}

/// User-facing message about the last load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: LoadKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    /// Header click: same key flips direction, new key starts descending
    SelectSortKey(SortKey),
    SetSort(SortSpec),
    LoadStarted(LoadKind),
    LoadSucceeded(Snapshot),
    LoadFailed { kind: LoadKind, message: String },
}

/// Toggle rule for choosing a sort column.
pub fn select_sort_key(current: SortSpec, key: SortKey) -> SortSpec {
    if current.key == key {
        SortSpec::new(key, current.direction.flipped())
    } else {
        SortSpec::new(key, SortDirection::Desc)
    }
}

/// Everything the lead table renders.
///
/// `visible` is the filtered and sorted view of the snapshot; `stats` always
/// describe the whole snapshot. While a load is in flight both keep their
/// previous values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    snapshot: Snapshot,
    query: String,
    sort: SortSpec,
    visible: LeadCollection,
    stats: LeadStats,
    loading: Option<LoadKind>,
    notice: Option<Notice>,
}

impl ViewState {
    pub fn visible(&self) -> &LeadCollection {
        &self.visible
    }

    pub fn stats(&self) -> LeadStats {
        self.stats
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetQuery(query) => {
                if query != self.query {
                    self.query = query;
                    self.rederive();
                }
            }
            Action::SelectSortKey(key) => {
                self.sort = select_sort_key(self.sort, key);
                self.rederive();
            }
            Action::SetSort(spec) => {
                if spec != self.sort {
                    self.sort = spec;
                    self.rederive();
                }
            }
            Action::LoadStarted(kind) => {
                self.loading = Some(kind);
                self.notice = None;
            }
            Action::LoadSucceeded(snapshot) => {
                self.stats = aggregate(&snapshot.leads);
                self.snapshot = snapshot;
                self.loading = None;
                self.notice = None;
                self.rederive();
            }
            Action::LoadFailed { kind, message } => {
                self.loading = None;
                self.notice = Some(Notice { kind, message });
            }
        }
    }

    fn rederive(&mut self) {
        self.visible = derive_view(&self.snapshot.leads, &self.query, self.sort);
        tracing::debug!(
            query = %self.query,
            sort = %self.sort,
            visible = self.visible.len(),
            total = self.snapshot.leads.len(),
            "view derived"
        );
    }
}

/// Pure transition function over [`ViewState`].
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    state.apply(action);
    state
}
