use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 已登记学生
/// - student_id: 8 位数字学号 (唯一)
/// - received_award: 仅由抽奖流程从 false 置为 true, 只有系统重置会清除
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub student_id: String,
    pub name: String,
    pub received_award: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
