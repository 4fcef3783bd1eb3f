pub mod category;
pub mod course;
pub mod course_material;
pub mod enrollment;
pub mod error;
pub mod instructor;
pub mod quiz;
pub mod student;
pub mod user;

pub use error::ServiceError;
