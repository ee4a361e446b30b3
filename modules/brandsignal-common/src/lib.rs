pub mod error;
pub mod probe;
pub mod types;

pub use error::BrandSignalError;
pub use probe::*;
pub use types::*;
