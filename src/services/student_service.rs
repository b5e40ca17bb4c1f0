use crate::entities::student_entity as students;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::EventStateMachine;
use crate::utils::validate_student_id;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

const DUPLICATE_STUDENT: &str = "Student with this ID is already registered.";

#[derive(Clone)]
pub struct StudentService {
    pool: DatabaseConnection,
    event_state: EventStateMachine,
}

impl StudentService {
    pub fn new(pool: DatabaseConnection, event_state: EventStateMachine) -> Self {
        Self { pool, event_state }
    }

    /// 学生自助登记
    ///
    /// 先校验格式 (任何阶段都返回 ValidationError), 再检查是否开放登记,
    /// 最后检查学号是否重复。姓名自动生成为 `Student <学号>`。
    pub async fn register(&self, std_id: &str) -> AppResult<StudentResponse> {
        let student_id = std_id.trim();
        validate_student_id(student_id)?;

        if !self.event_state.is_registration_open() {
            return Err(AppError::RegistrationClosed);
        }

        let student = self
            .insert_student(student_id, &format!("Student {student_id}"))
            .await?;
        log::info!("Student registered: {}", student.student_id);
        Ok(student)
    }

    /// 管理员添加学生 (不受活动阶段限制)
    pub async fn create_student(&self, request: CreateStudentRequest) -> AppResult<StudentResponse> {
        let student_id = request.student_id.trim();
        let name = request.name.trim();
        validate_student_id(student_id)?;
        if name.is_empty() {
            return Err(AppError::ValidationError("Name is required.".to_string()));
        }

        self.insert_student(student_id, name).await
    }

    /// 获取全部学生
    pub async fn list_all(&self) -> AppResult<Vec<StudentResponse>> {
        let list = students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn insert_student(&self, student_id: &str, name: &str) -> AppResult<StudentResponse> {
        let exists = students::Entity::find()
            .filter(students::Column::StudentId.eq(student_id))
            .one(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(AppError::Conflict(DUPLICATE_STUDENT.to_string()));
        }

        let now = Utc::now();
        // 并发登记同一学号时由唯一索引兜底
        let model = students::ActiveModel {
            student_id: Set(student_id.to_string()),
            name: Set(name.to_string()),
            received_award: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_insert(e, DUPLICATE_STUDENT))?;

        Ok(model.into())
    }
}

/// 尚未中奖的学生 (抽奖快照)
pub async fn find_available<C: ConnectionTrait>(db: &C) -> Result<Vec<students::Model>, DbErr> {
    students::Entity::find()
        .filter(students::Column::ReceivedAward.eq(false))
        .order_by_asc(students::Column::Id)
        .all(db)
        .await
}

/// 标记学生已中奖 (update where received_award = false)
///
/// 返回 false 表示该学生已经中过奖, 没有任何修改。
pub async fn mark_awarded<C: ConnectionTrait>(db: &C, student_id: &str) -> Result<bool, DbErr> {
    let result = students::Entity::update_many()
        .col_expr(students::Column::ReceivedAward, Expr::value(true))
        .col_expr(students::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(students::Column::StudentId.eq(student_id))
        .filter(students::Column::ReceivedAward.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected == 1)
}
