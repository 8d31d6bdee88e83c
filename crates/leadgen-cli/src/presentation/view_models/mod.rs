pub mod common;
pub mod leads;
pub mod result;
pub mod system;

pub use common::*;
pub use leads::*;
pub use result::*;
pub use system::*;

use std::fmt;

/// Bridge from a view model to the text view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
