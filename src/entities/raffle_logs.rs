use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 中奖记录实体
/// 说明:
/// - 每次成功分配奖品产生一条记录, 之后不再修改
/// - item_id 仅逻辑关联 raffle_items.id (数据库中无外键), 奖品删除后记录保留
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "raffle_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 学号 (指向 users.student_id)
    pub student_id: String,
    /// 奖品ID (指向 raffle_items.id)
    pub item_id: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::raffle_items::Entity",
        from = "Column::ItemId",
        to = "super::raffle_items::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    RaffleItem,
}

impl Related<super::raffle_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaffleItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
