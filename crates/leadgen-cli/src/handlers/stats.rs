use super::{HandlerContext, load_board};
use crate::args::ViewArgs;
use crate::presentation::presenters;
use anyhow::Result;
use leadgen_runtime::Config;

pub fn handle(config: &Config, ctx: &HandlerContext) -> Result<()> {
    let board = load_board(config, &ViewArgs::default())?;
    ctx.render(presenters::present_stats(board.state(), board.source_id()))
}
