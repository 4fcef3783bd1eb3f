use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub enrollment_id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub status: String,
    pub enrolled_at: chrono::NaiveDateTime,
}
