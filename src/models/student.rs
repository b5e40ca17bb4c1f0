use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::student_entity;

/// 学生自助登记请求
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "65010001")]
    pub std_id: String,
}

/// 管理员手动添加学生
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[schema(example = "65010001")]
    pub student_id: String,
    #[schema(example = "Somchai")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub student_id: String,
    pub name: String,
    pub received_award: bool,
}

impl From<student_entity::Model> for StudentResponse {
    fn from(m: student_entity::Model) -> Self {
        StudentResponse {
            student_id: m.student_id,
            name: m.name,
            received_award: m.received_award,
        }
    }
}
