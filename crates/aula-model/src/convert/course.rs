use aula_entity::course::Model as CourseModel;

use crate::convert::FromDbModel;
use crate::course::Course;

impl FromDbModel<CourseModel> for Course {
    fn from_db_model(model: CourseModel) -> Self {
        Self {
            course_id: model.id,
            instructor_id: model.instructor_id,
            category_id: model.category_id,
            name: model.name,
            description: model.description,
            image: model.image,
            created_at: model.created_at,
        }
    }
}
