pub mod category;
pub mod convert;
pub mod course;
pub mod course_material;
pub mod enrollment;
pub mod instructor;
pub mod login;
pub mod quiz;
pub mod student;
pub mod user;
