use super::HandlerContext;
use crate::args::ViewArgs;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use leadgen_runtime::{Config, LoadOutcome};

pub fn handle(config: &Config, view: &ViewArgs, ctx: &HandlerContext) -> Result<()> {
    let mut board = leadgen_runtime::open_board(config)?;
    board.set_query(view.query());
    board.set_sort(view.sort_spec());

    match board.trigger_scan() {
        LoadOutcome::Loaded {
            scan: Some(scan), ..
        } => ctx.render(presenters::present_scan(scan, board.state(), None)),
        LoadOutcome::Loaded { .. } => {
            ctx.render(presenters::present_lead_table(board.state(), None))
        }
        LoadOutcome::Failed { message, .. } => bail!(message),
    }
}
