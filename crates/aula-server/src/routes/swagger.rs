use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::{categories, courses, enrollments, instructors, login, quizzes, students, users};

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        login::register,
        login::login,
        login::logout,
        login::whoami,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        students::list_students,
        students::create_student,
        students::get_student,
        students::update_student,
        students::delete_student,
        students::get_student_enrollments,
        students::get_student_results,
        instructors::list_instructors,
        instructors::create_instructor,
        instructors::get_instructor,
        instructors::update_instructor,
        instructors::delete_instructor,
        instructors::get_instructor_courses,
        categories::list_categories,
        categories::create_category,
        categories::get_category,
        categories::update_category,
        categories::delete_category,
        courses::list_courses,
        courses::create_course,
        courses::get_course,
        courses::update_course,
        courses::delete_course,
        courses::get_material,
        courses::create_material,
        courses::update_material,
        courses::delete_material,
        courses::get_course_enrollments,
        courses::get_course_quizzes,
        enrollments::list_enrollments,
        enrollments::create_enrollment,
        enrollments::get_enrollment,
        enrollments::update_enrollment,
        enrollments::delete_enrollment,
        quizzes::list_quizzes,
        quizzes::create_quiz,
        quizzes::get_quiz,
        quizzes::update_quiz,
        quizzes::delete_quiz,
        quizzes::get_questions,
        quizzes::create_question,
        quizzes::get_question,
        quizzes::update_question,
        quizzes::delete_question,
        quizzes::get_answers,
        quizzes::create_answer,
        quizzes::get_answer,
        quizzes::update_answer,
        quizzes::delete_answer,
        quizzes::get_results,
        quizzes::submit_result,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // we can unwrap safely, since there already are components registered.
        let components = openapi.components.as_mut().expect("components not registered");
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Api Token"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
