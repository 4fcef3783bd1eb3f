use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseMaterial {
    pub material_id: i32,
    pub course_id: i32,
    pub title: String,
    pub material_type: String,
    pub file_path: String,
    pub created_at: chrono::NaiveDateTime,
}
