use std::fmt;

use crate::presentation::formatters::{
    color_enabled, paint_funding, paint_heading, paint_score, summarize_reasons, truncate,
};
use crate::presentation::view_models::{
    ExportViewModel, LeadRowViewModel, LeadTableViewModel, LoadFailureViewModel, ScanViewModel,
    StatsViewModel, ViewMode,
};

const NAME_WIDTH: usize = 24;
const TITLE_WIDTH: usize = 30;
const COMPANY_WIDTH: usize = 18;
const LOCATION_WIDTH: usize = 18;

// --------------------------------------------------------
// Lead Table View
// --------------------------------------------------------

pub struct LeadTableView<'a> {
    data: &'a LeadTableViewModel,
    mode: ViewMode,
    color: bool,
}

impl<'a> LeadTableView<'a> {
    pub fn new(data: &'a LeadTableViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            color: color_enabled(),
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for lead in &self.data.leads {
            writeln!(f, "{}", lead.id)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.query.is_empty() {
            writeln!(f, "Search: \"{}\"", self.data.query)?;
        }
        writeln!(f, "Sort: {}", self.data.sort)?;
        writeln!(f)?;

        if self.data.leads.is_empty() {
            return Ok(());
        }

        let header = format!(
            "{:>4}  {:>5}  {:<NAME_WIDTH$}  {:<TITLE_WIDTH$}  {:<COMPANY_WIDTH$}  {}",
            "RANK", "SCORE", "NAME", "TITLE", "COMPANY", "LOCATION"
        );
        writeln!(f, "{}", paint_heading(&header, self.color))?;

        for lead in &self.data.leads {
            self.render_row(f, lead)?;
            if self.mode == ViewMode::Verbose {
                self.render_details(f, lead)?;
            }
        }
        Ok(())
    }

    fn render_row(&self, f: &mut fmt::Formatter, lead: &LeadRowViewModel) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {}  {:<NAME_WIDTH$}  {:<TITLE_WIDTH$}  {:<COMPANY_WIDTH$}  {}",
            lead.rank,
            paint_score(lead.score, 5, self.color),
            truncate(&lead.name, NAME_WIDTH),
            truncate(&lead.title, TITLE_WIDTH),
            truncate(&lead.company, COMPANY_WIDTH),
            truncate(&lead.location_person, LOCATION_WIDTH),
        )
    }

    fn render_details(&self, f: &mut fmt::Formatter, lead: &LeadRowViewModel) -> fmt::Result {
        let indent = " ".repeat(13);

        if let Some(stage) = &lead.funding_stage {
            writeln!(
                f,
                "{}Funding: {}",
                indent,
                paint_funding(stage, lead.growth_stage, self.color)
            )?;
        }
        if lead.hq_differs {
            writeln!(f, "{}HQ: {}", indent, lead.location_company)?;
        }
        if let Some(paper) = &lead.recent_paper {
            writeln!(f, "{}Paper: {}", indent, paper)?;
        }
        if !lead.rank_reasons.is_empty() {
            writeln!(f, "{}Why: {}", indent, summarize_reasons(&lead.rank_reasons))?;
        }

        let contacts: Vec<&str> = [&lead.email, &lead.phone, &lead.linkedin_url]
            .into_iter()
            .filter_map(|c| c.as_deref())
            .collect();
        if !contacts.is_empty() {
            writeln!(f, "{}Contact: {}", indent, contacts.join("  "))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for LeadTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

// --------------------------------------------------------
// Stats View
// --------------------------------------------------------

pub struct StatsView<'a> {
    data: &'a StatsViewModel,
    mode: ViewMode,
}

impl<'a> StatsView<'a> {
    pub fn new(data: &'a StatsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(
                f,
                "{} {} {}",
                self.data.total, self.data.high_probability, self.data.average_score
            );
        }

        writeln!(f, "{:<18} {:>6}", "Total leads", self.data.total)?;
        writeln!(f, "{:<18} {:>6}", "High probability", self.data.high_probability)?;
        writeln!(f, "{:<18} {:>6}", "Average score", self.data.average_score)?;

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(f, "Source: {}", self.data.source)?;
            if let Some(at) = &self.data.received_at {
                writeln!(f, "Received: {}", at)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Scan View
// --------------------------------------------------------

pub struct ScanView<'a> {
    data: &'a ScanViewModel,
    mode: ViewMode,
}

impl<'a> ScanView<'a> {
    pub fn new(data: &'a ScanViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ScanView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", LeadTableView::new(&self.data.table, self.mode))
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.location {
            Some(location) if self.data.written => writeln!(
                f,
                "Wrote {} {} row(s) to {}",
                self.data.rows, self.data.scope, location
            ),
            _ => writeln!(f, "The {} lead list is empty; no file written", self.data.scope),
        }
    }
}

// --------------------------------------------------------
// Load Failure View
// --------------------------------------------------------

pub struct LoadFailureView<'a> {
    data: &'a LoadFailureViewModel,
}

impl<'a> LoadFailureView<'a> {
    pub fn new(data: &'a LoadFailureViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for LoadFailureView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.message)
    }
}
