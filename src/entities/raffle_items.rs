use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 奖品实体
/// quantity 只会被抽奖扣减 (每次 1) 或由管理员直接修改, 永远不为负
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "raffle_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub item_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Model {
    /// 是否还能参与抽奖
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::raffle_logs::Entity")]
    RaffleLogs,
}

impl Related<super::raffle_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaffleLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
