use aula_entity::enrollment::Model as EnrollmentModel;

use crate::convert::FromDbModel;
use crate::enrollment::Enrollment;

impl FromDbModel<EnrollmentModel> for Enrollment {
    fn from_db_model(model: EnrollmentModel) -> Self {
        Self {
            enrollment_id: model.id,
            student_id: model.student_id,
            course_id: model.course_id,
            status: model.status,
            enrolled_at: model.enrolled_at,
        }
    }
}
