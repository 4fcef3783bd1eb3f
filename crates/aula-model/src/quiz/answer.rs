use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub answer_id: i32,
    pub question_id: i32,
    pub text: String,
    pub answer_type: String,
    pub is_correct: bool,
}

impl QuizAnswer {
    /// Strips the solution flag before an answer is shown to a student.
    pub fn sanitize_for_student(&mut self) {
        self.is_correct = false;
    }
}
