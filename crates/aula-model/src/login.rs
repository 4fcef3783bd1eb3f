use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::user::User;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
}

/// The authenticated principal as the API reports it, including the linked
/// profile ids when the user has one.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i32>,
}
