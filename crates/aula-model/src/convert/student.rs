use aula_entity::student::Model as StudentModel;

use crate::convert::FromDbModel;
use crate::student::Student;

impl FromDbModel<StudentModel> for Student {
    fn from_db_model(model: StudentModel) -> Self {
        Self {
            student_id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            profile_picture: model.profile_picture,
        }
    }
}
