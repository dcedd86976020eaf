pub mod error;
pub mod feature_flags;
pub mod pricing;

pub use error::*;
pub use feature_flags::*;
pub use pricing::*;
