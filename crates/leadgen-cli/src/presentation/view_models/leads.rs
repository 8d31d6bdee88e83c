use leadgen_engine::SortSpec;
use leadgen_runtime::{ExportScope, LoadKind};
use leadgen_types::ScoreTier;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LeadTableViewModel {
    pub query: String,
    pub sort: SortSpec,
    /// Leads in the snapshot
    pub total: usize,
    /// Leads matching the query
    pub matched: usize,
    pub leads: Vec<LeadRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct LeadRowViewModel {
    pub rank: usize,
    pub id: String,
    pub score: f64,
    pub tier: ScoreTier,
    pub name: String,
    pub title: String,
    pub company: String,
    pub funding_stage: Option<String>,
    pub growth_stage: bool,
    pub location_person: String,
    pub location_company: String,
    pub hq_differs: bool,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub recent_paper: Option<String>,
    pub years_experience: u32,
    pub uses_tech: bool,
    pub open_to_nams: bool,
    pub is_hub: bool,
    pub rank_reasons: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsViewModel {
    pub total: usize,
    pub high_probability: usize,
    pub average_score: i64,
    pub source: String,
    pub received_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScanViewModel {
    pub message: String,
    pub new_leads: usize,
    pub table: LeadTableViewModel,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub scope: ExportScope,
    pub written: bool,
    pub rows: usize,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoadFailureViewModel {
    pub kind: LoadKind,
    pub message: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for LeadTableViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::leads::LeadTableView;
        Box::new(LeadTableView::new(self, mode))
    }
}

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::leads::StatsView;
        Box::new(StatsView::new(self, mode))
    }
}

impl CreateView for ScanViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::leads::ScanView;
        Box::new(ScanView::new(self, mode))
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::leads::ExportView;
        Box::new(ExportView::new(self))
    }
}

impl CreateView for LoadFailureViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::leads::LoadFailureView;
        Box::new(LoadFailureView::new(self))
    }
}
