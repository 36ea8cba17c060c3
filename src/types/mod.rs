pub mod fix;
pub mod log;

pub use fix::*;
pub use log::*;
