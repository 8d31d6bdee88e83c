use super::HandlerContext;
use crate::args::OutputFormat;
use crate::presentation::presenters;
use anyhow::Result;
use is_terminal::IsTerminal;
use leadgen_engine::SortKey;
use leadgen_runtime::{Config, ExportScope, FileSink, LeadBoard, LoadOutcome};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Clear,
    Sort(SortKey),
    Refresh,
    Scan,
    Export(Option<PathBuf>),
    Stats,
    Help,
    Quit,
    Empty,
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line.trim(), ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(BrowseCommand::Empty),
            "search" | "/" => {
                if rest.trim().is_empty() {
                    Err("Usage: search <text>".to_string())
                } else {
                    Ok(BrowseCommand::Search(rest.to_string()))
                }
            }
            "clear" => Ok(BrowseCommand::Clear),
            "sort" => rest
                .parse::<SortKey>()
                .map(BrowseCommand::Sort)
                .map_err(|err| {
                    format!("{} (expected score, name, title, company or location)", err)
                }),
            "refresh" => Ok(BrowseCommand::Refresh),
            "scan" => Ok(BrowseCommand::Scan),
            "export" => {
                let dir = rest.trim();
                Ok(BrowseCommand::Export(
                    (!dir.is_empty()).then(|| PathBuf::from(dir)),
                ))
            }
            "stats" => Ok(BrowseCommand::Stats),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            other => Err(format!("Unknown command: {} (type 'help')", other)),
        }
    }
}

pub fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let board = leadgen_runtime::open_board(config)?;
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = BrowseSession {
        board,
        ctx: HandlerContext::with_default_mode(format),
        export_dir: config.export_directory(),
        interactive,
    };
    session.run(stdin.lock())
}

struct BrowseSession {
    board: LeadBoard,
    ctx: HandlerContext,
    export_dir: PathBuf,
    interactive: bool,
}

impl BrowseSession {
    fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let outcome = self.board.refresh();
        self.show_load(outcome)?;
        if self.interactive {
            self.ctx.render(presenters::present_browse_help())?;
        }

        let mut lines = input.lines();
        loop {
            self.prompt()?;
            let Some(line) = lines.next() else {
                break;
            };

            match line?.parse::<BrowseCommand>() {
                Ok(BrowseCommand::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => eprintln!("{}", message),
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: BrowseCommand) -> Result<()> {
        tracing::debug!(?command, "browse command");
        match command {
            BrowseCommand::Search(query) => {
                self.board.set_query(query);
                self.show_table()
            }
            BrowseCommand::Clear => {
                self.board.set_query(String::new());
                self.show_table()
            }
            BrowseCommand::Sort(key) => {
                self.board.select_sort_key(key);
                self.show_table()
            }
            BrowseCommand::Refresh => {
                let outcome = self.board.refresh();
                self.show_load(outcome)
            }
            BrowseCommand::Scan => {
                let outcome = self.board.trigger_scan();
                self.show_load(outcome)
            }
            BrowseCommand::Export(dir) => {
                let sink = FileSink::new(dir.unwrap_or_else(|| self.export_dir.clone()));
                let outcome = self.board.export(ExportScope::Visible, &sink)?;
                self.ctx
                    .render(presenters::present_export(outcome, ExportScope::Visible))
            }
            BrowseCommand::Stats => self.ctx.render(presenters::present_stats(
                self.board.state(),
                self.board.source_id(),
            )),
            BrowseCommand::Help => self.ctx.render(presenters::present_browse_help()),
            BrowseCommand::Quit | BrowseCommand::Empty => Ok(()),
        }
    }

    fn show_load(&self, outcome: LoadOutcome) -> Result<()> {
        match outcome {
            LoadOutcome::Loaded {
                scan: Some(scan), ..
            } => self
                .ctx
                .render(presenters::present_scan(scan, self.board.state(), None)),
            LoadOutcome::Loaded { scan: None, .. } => self.show_table(),
            LoadOutcome::Failed { kind, message } => {
                self.ctx.render(presenters::present_load_failure(kind, message))
            }
        }
    }

    fn show_table(&self) -> Result<()> {
        self.ctx
            .render(presenters::present_lead_table(self.board.state(), None))
    }

    fn prompt(&self) -> Result<()> {
        if self.interactive {
            print!("leadgen> ");
            std::io::stdout().flush()?;
        }
        Ok(())
    }
}
