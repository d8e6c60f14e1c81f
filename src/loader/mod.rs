pub mod dataset;
pub mod source;

pub use dataset::*;
pub use source::*;
