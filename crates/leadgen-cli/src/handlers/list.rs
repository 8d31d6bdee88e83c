use super::{HandlerContext, load_board};
use crate::args::ViewArgs;
use crate::presentation::presenters;
use anyhow::Result;
use leadgen_runtime::Config;

pub fn handle(
    config: &Config,
    view: &ViewArgs,
    limit: Option<usize>,
    ctx: &HandlerContext,
) -> Result<()> {
    let board = load_board(config, view)?;
    ctx.render(presenters::present_lead_table(board.state(), limit))
}
