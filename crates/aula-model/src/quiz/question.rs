use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_id: i32,
    pub quiz_id: i32,
    pub text: String,
    pub created_at: chrono::NaiveDateTime,
}
