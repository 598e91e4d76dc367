pub mod boundary;
pub mod config;
pub mod error;
pub mod oracle;

pub use boundary::*;
pub use config::Config;
pub use error::*;
pub use oracle::BoundaryOracle;
