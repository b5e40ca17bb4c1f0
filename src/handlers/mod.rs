pub mod logs;
pub mod raffle;
pub mod raffle_item;
pub mod registration;
pub mod student;
pub mod system;

pub use logs::logs_config;
pub use raffle::raffle_config;
pub use raffle_item::raffle_item_config;
pub use registration::registration_config;
pub use student::student_config;
pub use system::system_config;
