pub mod aggregate;
pub mod indicators;
pub mod recommendations;

pub use aggregate::*;
pub use indicators::*;
pub use recommendations::*;
