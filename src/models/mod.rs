pub mod region;
pub mod tables;
pub mod transaction;

pub use region::*;
pub use tables::*;
pub use transaction::*;
