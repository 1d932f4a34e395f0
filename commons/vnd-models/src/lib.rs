pub mod merge;
pub mod vendor;

pub use merge::*;
pub use vendor::*;
