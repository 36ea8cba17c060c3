pub mod capture;
pub mod checksum;
pub mod framer;
pub mod gga;

pub use capture::*;
pub use checksum::*;
pub use framer::*;
pub use gga::*;
