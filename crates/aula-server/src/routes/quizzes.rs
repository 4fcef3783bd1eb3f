use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tokio::try_join;
use utoipa::ToSchema;

use aula_core::error::ServiceError;
use aula_core::quiz::answer::{AnswerPatch, NewAnswer};
use aula_core::quiz::result::NewResult;
use aula_core::quiz::{NewQuiz, QuizPatch};
use aula_model::convert::IntoModel;
use aula_model::quiz::answer::QuizAnswer;
use aula_model::quiz::question::QuizQuestion;
use aula_model::quiz::quiz::{Quiz, QuizFull};
use aula_model::quiz::result::QuizResult;

use crate::routes::error::ApiError;
use crate::session::Session;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_quizzes).post(create_quiz))
        .nest(
            "/{quiz_id}",
            Router::new()
                .route("/", get(get_quiz).put(update_quiz).delete(delete_quiz))
                .route("/results", get(get_results).post(submit_result))
                .nest(
                    "/questions",
                    Router::new()
                        .route("/", get(get_questions).post(create_question))
                        .nest(
                            "/{question_id}",
                            Router::new()
                                .route("/", get(get_question).put(update_question).delete(delete_question))
                                .route("/answers", get(get_answers).post(create_answer))
                                .route(
                                    "/answers/{answer_id}",
                                    get(get_answer).put(update_answer).delete(delete_answer),
                                ),
                        ),
                ),
        )
        .with_state(())
}

/// Loads a quiz and checks that the caller owns the course it belongs to.
async fn require_quiz_owner(
    conn: &DatabaseConnection,
    session: &Session,
    quiz_id: i32,
) -> Result<aula_entity::quiz::quiz::Model, ApiError> {
    let quiz = aula_core::quiz::get_quiz(conn, quiz_id).await?;
    let course = aula_core::course::get_course(conn, quiz.course_id).await?;
    session.require_instructor_or_admin(course.instructor_id)?;
    Ok(quiz)
}

/// Whether the caller may see correct-answer flags for the given quiz.
async fn may_see_solutions(
    conn: &DatabaseConnection,
    session: &Session,
    quiz: &aula_entity::quiz::quiz::Model,
) -> Result<bool, ApiError> {
    if session.is_admin() {
        return Ok(true);
    }
    let Some(instructor_id) = session.instructor_id else {
        return Ok(false);
    };
    let course = aula_core::course::get_course(conn, quiz.course_id).await?;
    Ok(course.instructor_id == instructor_id)
}

async fn get_question_in_quiz(
    conn: &DatabaseConnection,
    quiz_id: i32,
    question_id: i32,
) -> Result<aula_entity::quiz::question::Model, ApiError> {
    let question = aula_core::quiz::question::get_question(conn, question_id).await?;
    if question.quiz_id != quiz_id {
        return Err(ServiceError::not_found("quiz question", question_id).into());
    }
    Ok(question)
}

async fn get_answer_in_question(
    conn: &DatabaseConnection,
    quiz_id: i32,
    question_id: i32,
    answer_id: i32,
) -> Result<aula_entity::quiz::answer::Model, ApiError> {
    let _ = get_question_in_quiz(conn, quiz_id, question_id).await?;
    let answer = aula_core::quiz::answer::get_answer(conn, answer_id).await?;
    if answer.question_id != question_id {
        return Err(ServiceError::not_found("quiz answer", answer_id).into());
    }
    Ok(answer)
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes",
    responses(
        (status = OK, body = Vec<Quiz>, description = "All quizzes"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn list_quizzes(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Quiz>>, ApiError> {
    let quizzes = aula_core::quiz::list_quizzes(&conn).await?;
    Ok(Json(quizzes.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizPayload {
    course_id: i32,
    name: String,
    description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes",
    request_body = QuizPayload,
    responses(
        (status = CREATED, body = Quiz, description = "Quiz created"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown course"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn create_quiz(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<QuizPayload>,
) -> Result<(StatusCode, Json<Quiz>), ApiError> {
    let course = aula_core::course::get_course(&conn, payload.course_id).await?;
    session.require_instructor_or_admin(course.instructor_id)?;

    let quiz = aula_core::quiz::create_quiz(
        &conn,
        NewQuiz {
            course_id: payload.course_id,
            name: payload.name,
            description: payload.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(quiz.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}",
    responses(
        (status = OK, body = QuizFull, description = "The quiz with its questions"),
        (status = NOT_FOUND, description = "No such quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_quiz(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
) -> Result<Response, ApiError> {
    let (quiz, questions) = try_join!(
        aula_core::quiz::get_quiz(&conn, quiz_id),
        aula_core::quiz::question::list_questions_by_quiz(&conn, quiz_id),
    )?;

    let quiz: Quiz = quiz.into_model();
    let questions: Vec<QuizQuestion> = questions.into_iter().map(IntoModel::into_model).collect();
    let questions: Vec<&QuizQuestion> = questions.iter().collect();

    Ok(Json(quiz.as_quiz_full(questions)).into_response())
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizPatchPayload {
    name: Option<String>,
    description: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/v0/quizzes/{quiz_id}",
    request_body = QuizPatchPayload,
    responses(
        (status = OK, body = Quiz, description = "The updated quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn update_quiz(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
    Json(payload): Json<QuizPatchPayload>,
) -> Result<Json<Quiz>, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;

    let quiz = aula_core::quiz::update_quiz(
        &conn,
        quiz_id,
        QuizPatch {
            name: payload.name,
            description: payload.description,
        },
    )
    .await?;

    Ok(Json(quiz.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/quizzes/{quiz_id}",
    responses(
        (status = NO_CONTENT, description = "Quiz deleted"),
        (status = CONFLICT, description = "Quiz still has questions or results"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn delete_quiz(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;

    aula_core::quiz::delete_quiz(&conn, quiz_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}/questions",
    responses(
        (status = OK, body = Vec<QuizQuestion>, description = "Questions of the quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_questions(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let (_, questions) = try_join!(
        aula_core::quiz::get_quiz(&conn, quiz_id),
        aula_core::quiz::question::list_questions_by_quiz(&conn, quiz_id),
    )?;

    Ok(Json(questions.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionPayload {
    text: String,
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes/{quiz_id}/questions",
    request_body = QuestionPayload,
    responses(
        (status = CREATED, body = QuizQuestion, description = "Question created"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn create_question(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
    Json(payload): Json<QuestionPayload>,
) -> Result<(StatusCode, Json<QuizQuestion>), ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;

    let question = aula_core::quiz::question::create_question(&conn, quiz_id, &payload.text).await?;
    Ok((StatusCode::CREATED, Json(question.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}",
    responses(
        (status = OK, body = QuizQuestion, description = "The requested question"),
        (status = NOT_FOUND, description = "Question unknown or not part of the quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_question(
    _session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id)): Path<(i32, i32)>,
) -> Result<Json<QuizQuestion>, ApiError> {
    let question = get_question_in_quiz(&conn, quiz_id, question_id).await?;
    Ok(Json(question.into_model()))
}

#[utoipa::path(
    put,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}",
    request_body = QuestionPayload,
    responses(
        (status = OK, body = QuizQuestion, description = "The updated question"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn update_question(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id)): Path<(i32, i32)>,
    Json(payload): Json<QuestionPayload>,
) -> Result<Json<QuizQuestion>, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;
    let _ = get_question_in_quiz(&conn, quiz_id, question_id).await?;

    let question = aula_core::quiz::question::update_question(&conn, question_id, payload.text).await?;
    Ok(Json(question.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}",
    responses(
        (status = NO_CONTENT, description = "Question deleted"),
        (status = CONFLICT, description = "Question still has answers"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn delete_question(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;
    let _ = get_question_in_quiz(&conn, quiz_id, question_id).await?;

    aula_core::quiz::question::delete_question(&conn, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}/answers",
    responses(
        (status = OK, body = Vec<QuizAnswer>, description = "Answer options; correct-answer flags are only reported to the owning instructor or an admin"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_answers(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<QuizAnswer>>, ApiError> {
    let quiz = aula_core::quiz::get_quiz(&conn, quiz_id).await?;
    let _ = get_question_in_quiz(&conn, quiz_id, question_id).await?;

    let answers = aula_core::quiz::answer::list_answers_by_question(&conn, question_id).await?;
    let mut answers: Vec<QuizAnswer> = answers.into_iter().map(IntoModel::into_model).collect();

    if !may_see_solutions(&conn, &session, &quiz).await? {
        for answer in &mut answers {
            answer.sanitize_for_student();
        }
    }

    Ok(Json(answers))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnswerPayload {
    text: String,
    answer_type: String,
    is_correct: bool,
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}/answers",
    request_body = AnswerPayload,
    responses(
        (status = CREATED, body = QuizAnswer, description = "Answer option created"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn create_answer(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id)): Path<(i32, i32)>,
    Json(payload): Json<AnswerPayload>,
) -> Result<(StatusCode, Json<QuizAnswer>), ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;
    let _ = get_question_in_quiz(&conn, quiz_id, question_id).await?;

    let answer = aula_core::quiz::answer::create_answer(
        &conn,
        NewAnswer {
            question_id,
            text: payload.text,
            answer_type: payload.answer_type,
            is_correct: payload.is_correct,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(answer.into_model())))
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}/answers/{answer_id}",
    responses(
        (status = OK, body = QuizAnswer, description = "The requested answer option"),
        (status = NOT_FOUND, description = "Answer unknown or not part of the question"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_answer(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id, answer_id)): Path<(i32, i32, i32)>,
) -> Result<Json<QuizAnswer>, ApiError> {
    let quiz = aula_core::quiz::get_quiz(&conn, quiz_id).await?;
    let answer = get_answer_in_question(&conn, quiz_id, question_id, answer_id).await?;

    let mut answer: QuizAnswer = answer.into_model();
    if !may_see_solutions(&conn, &session, &quiz).await? {
        answer.sanitize_for_student();
    }

    Ok(Json(answer))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnswerPatchPayload {
    text: Option<String>,
    answer_type: Option<String>,
    is_correct: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}/answers/{answer_id}",
    request_body = AnswerPatchPayload,
    responses(
        (status = OK, body = QuizAnswer, description = "The updated answer option"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn update_answer(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id, answer_id)): Path<(i32, i32, i32)>,
    Json(payload): Json<AnswerPatchPayload>,
) -> Result<Json<QuizAnswer>, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;
    let _ = get_answer_in_question(&conn, quiz_id, question_id, answer_id).await?;

    let answer = aula_core::quiz::answer::update_answer(
        &conn,
        answer_id,
        AnswerPatch {
            text: payload.text,
            answer_type: payload.answer_type,
            is_correct: payload.is_correct,
        },
    )
    .await?;

    Ok(Json(answer.into_model()))
}

#[utoipa::path(
    delete,
    path = "/api/v0/quizzes/{quiz_id}/questions/{question_id}/answers/{answer_id}",
    responses(
        (status = NO_CONTENT, description = "Answer option deleted"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn delete_answer(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path((quiz_id, question_id, answer_id)): Path<(i32, i32, i32)>,
) -> Result<StatusCode, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;
    let _ = get_answer_in_question(&conn, quiz_id, question_id, answer_id).await?;

    aula_core::quiz::answer::delete_answer(&conn, answer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}/results",
    responses(
        (status = OK, body = Vec<QuizResult>, description = "Results recorded for the quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn get_results(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
) -> Result<Json<Vec<QuizResult>>, ApiError> {
    require_quiz_owner(&conn, &session, quiz_id).await?;

    let results = aula_core::quiz::result::list_results_by_quiz(&conn, quiz_id).await?;
    Ok(Json(results.into_iter().map(IntoModel::into_model).collect()))
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultPayload {
    student_id: i32,
    score: i32,
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes/{quiz_id}/results",
    request_body = ResultPayload,
    responses(
        (status = CREATED, body = QuizResult, description = "Result recorded"),
        (status = CONFLICT, description = "The student already has a result for the quiz"),
    ),
    tag = "v0/quizzes",
    security(("token" = []))
)]
pub(crate) async fn submit_result(
    session: Session,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<i32>,
    Json(payload): Json<ResultPayload>,
) -> Result<(StatusCode, Json<QuizResult>), ApiError> {
    session.require_student_or_admin(payload.student_id)?;

    let result = aula_core::quiz::result::create_result(
        &conn,
        NewResult {
            quiz_id,
            student_id: payload.student_id,
            score: payload.score,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(result.into_model())))
}
