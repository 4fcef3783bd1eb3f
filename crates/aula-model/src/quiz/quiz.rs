use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::quiz::question::QuizQuestion;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: i32,
    pub course_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Quiz {
    #[must_use]
    pub fn as_quiz_full<'a>(&'a self, questions: Vec<&'a QuizQuestion>) -> QuizFull<'a> {
        QuizFull {
            quiz_id: self.quiz_id,
            course_id: self.course_id,
            name: &self.name,
            description: self.description.as_deref(),
            questions,
            created_at: self.created_at,
        }
    }
}

#[derive(Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuizFull<'a> {
    pub quiz_id: i32,
    pub course_id: i32,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<&'a QuizQuestion>,
    pub created_at: chrono::NaiveDateTime,
}
