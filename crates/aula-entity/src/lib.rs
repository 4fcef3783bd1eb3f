pub mod access_tokens;
pub mod category;
pub mod course;
pub mod course_material;
pub mod enrollment;
pub mod instructor;
pub mod quiz;
pub mod student;
pub mod user;
