use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::raffle_item_entity;

/// 创建奖品
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRaffleItemRequest {
    #[schema(example = "Mug")]
    pub name: String,
    /// 数量, 不能为负; 0 合法但不参与抽奖
    #[schema(example = 3)]
    pub quantity: i32,
    pub item_pic: Option<String>,
}

/// 部分更新奖品, 未提供的字段保持不变
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRaffleItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub item_pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaffleItemResponse {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_pic: Option<String>,
}

impl From<raffle_item_entity::Model> for RaffleItemResponse {
    fn from(m: raffle_item_entity::Model) -> Self {
        RaffleItemResponse {
            id: m.id,
            name: m.name,
            quantity: m.quantity,
            item_pic: m.item_pic,
        }
    }
}

/// 奖品简要信息 (中奖结果与记录中使用)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaffleItemSummary {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_pic: Option<String>,
}

impl From<&raffle_item_entity::Model> for RaffleItemSummary {
    fn from(m: &raffle_item_entity::Model) -> Self {
        RaffleItemSummary {
            id: m.id,
            name: m.name.clone(),
            item_pic: m.item_pic.clone(),
        }
    }
}

/// 批量导入结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub success_count: u32,
    pub fail_count: u32,
}
