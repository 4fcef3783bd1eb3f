pub(crate) mod categories;
pub(crate) mod courses;
pub(crate) mod enrollments;
pub(crate) mod error;
pub(crate) mod instructors;
pub(crate) mod login;
pub(crate) mod quizzes;
pub(crate) mod students;
pub(crate) mod swagger;
pub(crate) mod users;
