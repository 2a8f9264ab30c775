pub mod catalog;
pub use catalog::*;

pub mod column;
pub use column::*;

pub mod extract;
pub use extract::*;

pub mod table;
pub use table::*;
