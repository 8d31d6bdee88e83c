//! End-to-end board flow against files on disk.

use leadgen_engine::SortKey;
use leadgen_runtime::{
    Config, ExportOutcome, ExportScope, FileSink, LoadKind, LoadOutcome, open_board,
};
use std::path::Path;
use tempfile::TempDir;

const LEADS: &str = r#"[
    {
        "person": {"id": "golden-1", "name": "Dr. Sarah Chen", "title": "Director of Safety Assessment",
                   "company": "Hepatix Bio", "location_person": "Cambridge, MA", "location_company": "Cambridge, MA",
                   "email": "s.chen@hepatix.bio"},
        "company_meta": {"name": "Hepatix Bio", "funding_stage": "Series B", "is_hub": true},
        "person_meta": {"has_recent_paper": true, "paper_title": "Predictive DILI Models", "years_experience": 15},
        "score": 95,
        "rank_reasons": ["High Value Role (+30)", "Recent IDILI/3D Paper (+40)"]
    },
    {
        "person": {"id": "p-2", "name": "Marcus Webb", "title": "Junior Researcher",
                   "company": "SmallStart", "location_person": "Remote", "location_company": "San Diego, CA"},
        "company_meta": {"name": "SmallStart", "funding_stage": "Seed"},
        "score": 15,
        "rank_reasons": []
    },
    {
        "person": {"id": "p-3", "name": "Lena Ortiz", "title": "Head of Preclinical",
                   "company": "NanoCure", "location_person": "Boston, MA", "location_company": "Boston, MA"},
        "company_meta": {"name": "NanoCure", "funding_stage": "Series A", "uses_tech": true},
        "score": 70,
        "rank_reasons": ["High Value Role (+30)"]
    }
]"#;

fn write_config(dir: &Path, scan: Option<&str>) -> Config {
    let leads_path = dir.join("leads.json");
    std::fs::write(&leads_path, LEADS).unwrap();

    let scan_path = scan.map(|body| {
        let path = dir.join("scan.json");
        std::fs::write(&path, body).unwrap();
        path
    });

    let mut config = Config::default();
    config.use_file_source(leads_path, scan_path);
    config.retry.max_attempts = 1;
    config
}

#[test]
fn refresh_filter_sort_export() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), None);
    let mut board = open_board(&config).unwrap();
    assert_eq!(board.source_id(), "file");

    assert!(board.refresh().is_loaded());
    let stats = board.state().stats();
    assert_eq!((stats.total, stats.high_probability, stats.average_score), (3, 1, 60));

    board.set_query(", ma");
    board.select_sort_key(SortKey::Location);
    let names: Vec<&str> = board
        .state()
        .visible()
        .iter()
        .map(|l| l.person.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dr. Sarah Chen", "Lena Ortiz"]);

    let sink = FileSink::new(dir.path().join("out"));
    let outcome = board.export(ExportScope::Visible, &sink).unwrap();
    let ExportOutcome::Delivered { rows, location } = outcome else {
        panic!("expected a delivered export");
    };
    assert_eq!(rows, 2);
    assert!(location.ends_with("qualified_leads.csv"));

    let csv = std::fs::read_to_string(location).unwrap();
    assert!(csv.starts_with("Rank,Score,Name,"));
    assert!(csv.contains("1,95,Dr. Sarah Chen,"));
    assert!(csv.contains("2,70,Lena Ortiz,"));
}

#[test]
fn scan_with_broken_file_keeps_snapshot() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), Some("{\"message\": \"Scan complete\"}"));
    let mut board = open_board(&config).unwrap();
    board.refresh();

    let outcome = board.trigger_scan();
    assert!(matches!(outcome, LoadOutcome::Failed { kind: LoadKind::Scan, .. }));
    assert_eq!(board.state().stats().total, 3);
    assert!(board.state().notice().is_some());
}
