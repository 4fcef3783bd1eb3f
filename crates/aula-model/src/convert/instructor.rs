use aula_entity::instructor::Model as InstructorModel;

use crate::convert::FromDbModel;
use crate::instructor::Instructor;

impl FromDbModel<InstructorModel> for Instructor {
    fn from_db_model(model: InstructorModel) -> Self {
        Self {
            instructor_id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            profile_picture: model.profile_picture,
        }
    }
}
