pub mod collection;
pub mod error;
pub mod lead;

pub use collection::LeadCollection;
pub use error::{Error, Result};
pub use lead::*;
