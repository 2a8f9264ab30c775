pub mod datatype;
pub use datatype::*;

pub mod highlight;
pub use highlight::*;

pub mod statement;
pub use statement::*;
