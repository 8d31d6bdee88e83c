use std::fmt;

use crate::presentation::view_models::{BrowseHelpViewModel, ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# {}", self.data.path)?;
        match self.data.config.to_toml() {
            Ok(body) => write!(f, "{}", body),
            Err(err) => writeln!(f, "# could not render config: {}", err),
        }
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}

pub struct BrowseHelpView<'a> {
    data: &'a BrowseHelpViewModel,
}

impl<'a> BrowseHelpView<'a> {
    pub fn new(data: &'a BrowseHelpViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for BrowseHelpView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for command in &self.data.commands {
            writeln!(f, "  {:<16} {}", command.usage, command.description)?;
        }
        Ok(())
    }
}
