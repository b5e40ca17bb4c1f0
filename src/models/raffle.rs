use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RaffleItemSummary;
use crate::entities::{raffle_item_entity, raffle_log_entity, student_entity};

/// 抽奖请求参数, n 缺省为 1
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RaffleQuery {
    pub n: Option<String>,
}

/// 一位中奖者及其获得的奖品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerAssignment {
    pub student_id: String,
    /// 学生姓名
    pub name: String,
    pub item: RaffleItemSummary,
}

impl WinnerAssignment {
    pub fn new(student: &student_entity::Model, item: &raffle_item_entity::Model) -> Self {
        WinnerAssignment {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            item: RaffleItemSummary::from(item),
        }
    }
}

/// 一次抽奖的结果
///
/// `winners.len()` 才是实际中奖人数, 可能小于请求的 `requested`
/// (学生不足时截断, 或奖品中途用完)。
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub requested: u32,
    pub effective: usize,
    pub winners: Vec<WinnerAssignment>,
}

impl DrawOutcome {
    pub fn summary(&self) -> String {
        format!(
            "Raffle completed successfully. {} winner(s) selected.",
            self.winners.len()
        )
    }
}

/// 中奖记录 (附带奖品信息, 奖品已删除时为 null)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaffleLogResponse {
    pub student_id: String,
    pub item: Option<RaffleItemSummary>,
    pub timestamp: DateTime<Utc>,
}

impl From<(raffle_log_entity::Model, Option<raffle_item_entity::Model>)> for RaffleLogResponse {
    fn from((log, item): (raffle_log_entity::Model, Option<raffle_item_entity::Model>)) -> Self {
        RaffleLogResponse {
            student_id: log.student_id,
            item: item.as_ref().map(RaffleItemSummary::from),
            timestamp: log.timestamp,
        }
    }
}
