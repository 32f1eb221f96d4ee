mod bounds;
mod clean;
mod cut;
mod dedup;
mod edge;
mod error;
mod float;
mod predicates;
mod rational;
pub mod rtree;

pub use clean::*;
pub use error::*;
