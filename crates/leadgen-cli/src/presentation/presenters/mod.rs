pub mod leads;
pub mod system;

pub use leads::*;
pub use system::*;
