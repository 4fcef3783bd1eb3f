use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub result_id: i32,
    pub quiz_id: i32,
    pub student_id: i32,
    pub score: i32,
    pub completed_at: chrono::NaiveDateTime,
}
