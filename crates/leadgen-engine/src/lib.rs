// Engine module - pure derivations over a lead snapshot (search, ordering, KPIs, export)
// This layer sits between validated lead collections (types) and the runtime view-model

pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod sort;

pub use aggregate::{LeadStats, aggregate, round_half_up};
pub use error::{Error, Result};
pub use export::{EXPORT_COLUMNS, EXPORT_FILE_NAME, serialize, write_csv};
pub use filter::filter;
pub use sort::{SortDirection, SortKey, SortSpec, sort};

use leadgen_types::LeadCollection;

// Façade API - Stable public interface for the runtime layer

/// Display sequence for a snapshot: filter by `query`, then order by `spec`.
pub fn derive_view(snapshot: &LeadCollection, query: &str, spec: SortSpec) -> LeadCollection {
    let filtered = filter(snapshot, query);
    sort(&filtered, spec.key, spec.direction)
}
