pub mod palette;
pub mod record;

pub use palette::*;
pub use record::*;
