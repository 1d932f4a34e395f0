pub mod vendor;

pub use vendor::*;
