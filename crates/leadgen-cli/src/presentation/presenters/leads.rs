use crate::presentation::view_models::{
    CommandResultViewModel, ExportViewModel, Guidance, LeadRowViewModel, LeadTableViewModel,
    LoadFailureViewModel, ScanViewModel, StatsViewModel, StatusBadge,
};
use leadgen_runtime::{ExportOutcome, ExportScope, LoadKind, ScanSummary, ViewState};
use leadgen_types::LeadRecord;

pub fn present_lead_row(rank: usize, lead: &LeadRecord) -> LeadRowViewModel {
    LeadRowViewModel {
        rank,
        id: lead.id.to_string(),
        score: lead.score,
        tier: lead.tier(),
        name: lead.person.name.clone(),
        title: lead.person.title.clone(),
        company: lead.person.company.clone(),
        funding_stage: lead.funding_stage().map(str::to_string),
        growth_stage: lead.is_growth_stage(),
        location_person: lead.person.location_person.clone(),
        location_company: lead.person.location_company.clone(),
        hq_differs: lead.hq_differs(),
        email: lead.person.email.clone(),
        phone: lead.person.phone.clone(),
        linkedin_url: lead.person.linkedin_url.clone(),
        recent_paper: lead.person_meta.recent_paper().map(str::to_string),
        years_experience: lead.person_meta.years_experience,
        uses_tech: lead.company_meta.uses_tech,
        open_to_nams: lead.company_meta.open_to_nams,
        is_hub: lead.company_meta.is_hub,
        rank_reasons: lead.rank_reasons.clone(),
    }
}

pub fn build_lead_table(state: &ViewState, limit: Option<usize>) -> LeadTableViewModel {
    let visible = state.visible();
    let shown = limit.unwrap_or(visible.len());

    LeadTableViewModel {
        query: state.query().to_string(),
        sort: state.sort(),
        total: state.snapshot().leads.len(),
        matched: visible.len(),
        leads: visible
            .iter()
            .take(shown)
            .enumerate()
            .map(|(index, lead)| present_lead_row(index + 1, lead))
            .collect(),
    }
}

pub fn present_lead_table(
    state: &ViewState,
    limit: Option<usize>,
) -> CommandResultViewModel<LeadTableViewModel> {
    let content = build_lead_table(state, limit);
    let badge = table_badge(&content);
    let empty_snapshot = content.total == 0;
    let no_match = content.matched == 0 && !empty_snapshot;

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if empty_snapshot {
        result = result.with_suggestion(
            Guidance::new("Ask the server for fresh leads").with_command("leadgen scan"),
        );
    } else if no_match {
        result = result.with_suggestion(
            Guidance::new("Search covers name, title, company and location; try a shorter query"),
        );
    }

    result
}

fn table_badge(table: &LeadTableViewModel) -> StatusBadge {
    if table.total == 0 {
        return StatusBadge::info("No leads yet");
    }
    if table.matched == 0 {
        return StatusBadge::warning(format!("No leads match \"{}\"", table.query));
    }

    let shown = table.leads.len();
    let label = if shown < table.matched {
        format!("Showing {} of {} matching leads", shown, table.matched)
    } else if table.matched < table.total {
        format!("{} of {} leads match \"{}\"", table.matched, table.total, table.query)
    } else {
        format!("{} lead(s)", table.total)
    };
    StatusBadge::success(label)
}

pub fn present_stats(state: &ViewState, source: &str) -> CommandResultViewModel<StatsViewModel> {
    let stats = state.stats();
    let content = StatsViewModel {
        total: stats.total,
        high_probability: stats.high_probability,
        average_score: stats.average_score,
        source: source.to_string(),
        received_at: state.snapshot().received_at.map(|t| t.to_rfc3339()),
    };
    CommandResultViewModel::new(content)
}

pub fn present_scan(
    scan: ScanSummary,
    state: &ViewState,
    limit: Option<usize>,
) -> CommandResultViewModel<ScanViewModel> {
    let badge = StatusBadge::success(format!(
        "{} ({} new, {} total)",
        scan.message,
        scan.new_leads,
        state.snapshot().leads.len()
    ));
    let content = ScanViewModel {
        message: scan.message,
        new_leads: scan.new_leads,
        table: build_lead_table(state, limit),
    };
    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_export(
    outcome: ExportOutcome,
    scope: ExportScope,
) -> CommandResultViewModel<ExportViewModel> {
    match outcome {
        ExportOutcome::Skipped => CommandResultViewModel::new(ExportViewModel {
            scope,
            written: false,
            rows: 0,
            location: None,
        })
        .with_badge(StatusBadge::warning("Nothing to export"))
        .with_suggestion(Guidance::new("Clear the search or refresh before exporting")),
        ExportOutcome::Delivered { rows, location } => {
            CommandResultViewModel::new(ExportViewModel {
                scope,
                written: true,
                rows,
                location: Some(location.display().to_string()),
            })
            .with_badge(StatusBadge::success(format!("Exported {} lead(s)", rows)))
        }
    }
}

pub fn present_load_failure(
    kind: LoadKind,
    message: String,
) -> CommandResultViewModel<LoadFailureViewModel> {
    let suggestion = match kind {
        LoadKind::Refresh => {
            Guidance::new("Check that the lead server is running").with_command("refresh")
        }
        LoadKind::Scan => {
            Guidance::new("Retry the scan once the server is reachable").with_command("scan")
        }
    };
    CommandResultViewModel::new(LoadFailureViewModel { kind, message })
        .with_badge(StatusBadge::warning(format!("{} failed; showing previous results", kind)))
        .with_suggestion(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadgen_runtime::{Action, Snapshot, reduce};
    use leadgen_types::{CompanyMeta, LeadCollection, LeadId, Person, PersonMeta};

    fn state() -> ViewState {
        let lead = |id: &str, score: f64, name: &str| LeadRecord {
            id: LeadId::from(id),
            score,
            person: Person {
                name: name.to_string(),
                title: "VP Safety".to_string(),
                company: "Acme".to_string(),
                email: None,
                location_person: "Remote".to_string(),
                location_company: "Boston, MA".to_string(),
                linkedin_url: None,
                phone: None,
                avatar: None,
            },
            person_meta: PersonMeta::default(),
            company_meta: CompanyMeta {
                funding_stage: Some("Series A".to_string()),
                ..CompanyMeta::default()
            },
            rank_reasons: vec![],
        };
        let leads =
            LeadCollection::new(vec![lead("a", 20.0, "Ann"), lead("b", 85.0, "Bo")]).unwrap();
        reduce(
            ViewState::default(),
            Action::LoadSucceeded(Snapshot::received(leads, LoadKind::Refresh)),
        )
    }

    #[test]
    fn test_rows_are_ranked_in_view_order() {
        let table = build_lead_table(&state(), None);
        assert_eq!(table.leads[0].rank, 1);
        assert_eq!(table.leads[0].id, "b");
        assert!(table.leads[0].growth_stage);
        assert!(table.leads[0].hq_differs);
    }

    #[test]
    fn test_limit_is_reflected_in_badge() {
        let result = present_lead_table(&state(), Some(1));
        assert_eq!(result.content.leads.len(), 1);
        assert_eq!(
            result.badge.unwrap().label,
            "Showing 1 of 2 matching leads"
        );
    }

    #[test]
    fn test_no_match_suggests_shorter_query() {
        let state = reduce(state(), Action::SetQuery("zzz".to_string()));
        let result = present_lead_table(&state, None);
        assert_eq!(result.badge.unwrap().label, "No leads match \"zzz\"");
        assert_eq!(result.suggestions.len(), 1);
    }
}
