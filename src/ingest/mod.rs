pub mod config;
pub use config::*;

pub mod driver;
pub use driver::*;

pub mod report;
pub use report::*;
