pub mod leads;
pub mod system;
