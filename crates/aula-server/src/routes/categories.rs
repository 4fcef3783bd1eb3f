use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::ToSchema;

use aula_core::category::CategoryPatch;
use aula_model::category::Category;
use aula_model::convert::IntoModel;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{category_id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/categories",
    responses(
        (status = OK, body = Vec<Category>, description = "All course categories"),
    ),
    tag = "v0/categories",
    security(("token" = []))
)]
pub(crate) async fn list_categories(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = aula_core::category::list_categories(&conn).await?;
    Ok(Json(categories.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryPayload {
    category_name: String,
    description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/categories",
    request_body = CategoryPayload,
    responses(
        (status = CREATED, body = Category, description = "Category created"),
    ),
    tag = "v0/categories",
    security(("token" = []))
)]
pub(crate) async fn create_category(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    session.require_admin()?;

    let category =
        aula_core::category::create_category(&conn, &payload.category_name, payload.description).await?;

    Ok((StatusCode::CREATED, Json(category.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/categories/{category_id}",
    responses(
        (status = OK, body = Category, description = "The requested category"),
        (status = NOT_FOUND, description = "No such category"),
    ),
    tag = "v0/categories",
    security(("token" = []))
)]
pub(crate) async fn get_category(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(category_id): Path<i32>,
) -> Result<Json<Category>, ApiError> {
    let category = aula_core::category::get_category(&conn, category_id).await?;
    Ok(Json(category.into_model()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryPatchPayload {
    category_name: Option<String>,
    description: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/categories/{category_id}",
    request_body = CategoryPatchPayload,
    responses(
        (status = OK, body = Category, description = "The updated category"),
    ),
    tag = "v0/categories",
    security(("token" = []))
)]
pub(crate) async fn update_category(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(category_id): Path<i32>,
    Json(payload): Json<CategoryPatchPayload>,
) -> Result<Json<Category>, ApiError> {
    session.require_admin()?;

    let category = aula_core::category::update_category(
        &conn,
        category_id,
        CategoryPatch {
            name: payload.category_name,
            description: payload.description,
        },
    )
    .await?;

    Ok(Json(category.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/categories/{category_id}",
    responses(
        (status = NO_CONTENT, description = "Category deleted"),
        (status = CONFLICT, description = "Category still referenced by courses"),
    ),
    tag = "v0/categories",
    security(("token" = []))
)]
pub(crate) async fn delete_category(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(category_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    session.require_admin()?;

    aula_core::category::delete_category(&conn, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
