pub mod analysis;
pub mod record;
pub mod turn;

pub use analysis::*;
pub use record::*;
pub use turn::*;
