//! Row-to-model conversion. Every column of a db row is covered by exactly
//! one `FromDbModel` impl so the translation stays centralized and total.

mod category;
mod course;
mod course_material;
mod enrollment;
mod instructor;
mod quiz;
mod student;
mod user;

pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}
