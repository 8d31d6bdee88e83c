use crate::presentation::view_models::{
    BrowseCommandHelp, BrowseHelpViewModel, CommandResultViewModel, ConfigInitViewModel,
    ConfigViewModel, Guidance, StatusBadge,
};
use leadgen_runtime::Config;
use std::path::Path;

pub fn present_config(path: &Path, config: Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let result = CommandResultViewModel::new(ConfigViewModel {
        path: path.display().to_string(),
        exists,
        config,
    });

    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file; using defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk").with_command("leadgen config init"),
            )
    }
}

pub fn present_config_init(
    path: &Path,
    created: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if created {
        StatusBadge::success("Config written")
    } else {
        StatusBadge::warning("Config already exists; left untouched")
    };
    let result = CommandResultViewModel::new(ConfigInitViewModel {
        path: path.display().to_string(),
        created,
    })
    .with_badge(badge);

    if created {
        result
    } else {
        result.with_suggestion(
            Guidance::new("Overwrite it").with_command("leadgen config init --force"),
        )
    }
}

pub fn present_browse_help() -> CommandResultViewModel<BrowseHelpViewModel> {
    let commands = [
        ("search <text>", "Filter by name, title, company or location"),
        ("clear", "Remove the search filter"),
        ("sort <key>", "Sort by score, name, title, company or location (again to flip)"),
        ("refresh", "Fetch the latest leads"),
        ("scan", "Run a new scan on the server"),
        ("export [dir]", "Write the current view to CSV"),
        ("stats", "Show totals for the whole list"),
        ("help", "Show this help"),
        ("quit", "Leave"),
    ]
    .into_iter()
    .map(|(usage, description)| BrowseCommandHelp { usage, description })
    .collect();

    CommandResultViewModel::new(BrowseHelpViewModel { commands })
}
