use axum::{Extension, Router};
use http::{Method, header};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;

pub fn create_app(conn: DatabaseConnection) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/auth", routes::login::create_router())
                .nest("/users", routes::users::create_router())
                .nest("/students", routes::students::create_router())
                .nest("/instructors", routes::instructors::create_router())
                .nest("/categories", routes::categories::create_router())
                .nest("/courses", routes::courses::create_router())
                .nest("/enrollments", routes::enrollments::create_router())
                .nest("/quizzes", routes::quizzes::create_router()),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(conn))
}
