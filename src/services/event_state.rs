use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// 活动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventState {
    /// 开放登记
    #[default]
    RegistrationOpen,
    /// 抽奖进行中, 登记关闭
    RaffleStarted,
    RaffleEnded,
}

impl fmt::Display for EventState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventState::RegistrationOpen => write!(f, "REGISTRATION_OPEN"),
            EventState::RaffleStarted => write!(f, "RAFFLE_STARTED"),
            EventState::RaffleEnded => write!(f, "RAFFLE_ENDED"),
        }
    }
}

impl EventState {
    /// REGISTRATION_OPEN -> RAFFLE_STARTED, 已开始时保持不变
    pub fn start(self) -> AppResult<EventState> {
        match self {
            EventState::RegistrationOpen | EventState::RaffleStarted => {
                Ok(EventState::RaffleStarted)
            }
            EventState::RaffleEnded => Err(AppError::InvalidStateTransition {
                from: self,
                to: EventState::RaffleStarted,
            }),
        }
    }

    /// 任意阶段都可以结束
    pub fn end(self) -> EventState {
        EventState::RaffleEnded
    }

    pub fn is_registration_open(self) -> bool {
        self == EventState::RegistrationOpen
    }
}

/// 进程内唯一的活动状态, 在 main 中创建后注入到需要的服务
///
/// 只在单进程部署下成立; 多实例之间不会同步。
#[derive(Clone, Default)]
pub struct EventStateMachine {
    state: Arc<RwLock<EventState>>,
}

impl EventStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> EventState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_registration_open(&self) -> bool {
        self.current().is_registration_open()
    }

    pub fn start(&self) -> AppResult<EventState> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = state.start()?;
        if *state != next {
            log::info!("Event state changed: {} -> {}", *state, next);
        }
        *state = next;
        Ok(next)
    }

    pub fn end(&self) -> EventState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = state.end();
        log::info!("Event state changed: {} -> {}", *state, next);
        *state = next;
        next
    }

    pub fn reset(&self) -> EventState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        log::info!("Event state reset: {} -> {}", *state, EventState::RegistrationOpen);
        *state = EventState::RegistrationOpen;
        *state
    }
}
