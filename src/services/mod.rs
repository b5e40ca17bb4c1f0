pub mod event_state;
pub mod log_service;
pub mod raffle_item_service;
pub mod raffle_service;
pub mod student_service;
pub mod system_service;

pub use event_state::{EventState, EventStateMachine};
pub use log_service::LogService;
pub use raffle_item_service::RaffleItemService;
pub use raffle_service::RaffleService;
pub use student_service::StudentService;
pub use system_service::SystemService;
