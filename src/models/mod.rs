pub mod common;
pub mod raffle;
pub mod raffle_item;
pub mod student;
pub mod system;

pub use common::*;
pub use raffle::*;
pub use raffle_item::*;
pub use student::*;
pub use system::*;
