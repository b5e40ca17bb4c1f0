pub mod raffle_items;
pub mod raffle_logs;
pub mod users;

pub use raffle_items as raffle_item_entity;
pub use raffle_logs as raffle_log_entity;
pub use users as student_entity;
