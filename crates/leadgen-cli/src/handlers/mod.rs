mod context;

pub mod browse;
pub mod config;
pub mod export;
pub mod list;
pub mod scan;
pub mod stats;

pub use context::HandlerContext;

use crate::args::ViewArgs;
use anyhow::{Result, bail};
use leadgen_runtime::{Config, LeadBoard, LoadOutcome};

/// Open the configured board, apply search and ordering, and load the first snapshot.
///
/// One-shot commands have no previous snapshot to fall back on, so a failed
/// load is an error here.
pub(crate) fn load_board(config: &Config, view: &ViewArgs) -> Result<LeadBoard> {
    let mut board = leadgen_runtime::open_board(config)?;
    board.set_query(view.query());
    board.set_sort(view.sort_spec());

    if let LoadOutcome::Failed { message, .. } = board.refresh() {
        bail!(message);
    }
    Ok(board)
}
