use leadgen_runtime::Config;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct BrowseHelpViewModel {
    pub commands: Vec<BrowseCommandHelp>,
}

#[derive(Debug, Serialize)]
pub struct BrowseCommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}

impl CreateView for BrowseHelpViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::BrowseHelpView;
        Box::new(BrowseHelpView::new(self))
    }
}
