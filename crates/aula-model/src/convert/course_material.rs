use aula_entity::course_material::Model as MaterialModel;

use crate::convert::FromDbModel;
use crate::course_material::CourseMaterial;

impl FromDbModel<MaterialModel> for CourseMaterial {
    fn from_db_model(model: MaterialModel) -> Self {
        Self {
            material_id: model.id,
            course_id: model.course_id,
            title: model.title,
            material_type: model.material_type,
            file_path: model.file_path,
            created_at: model.created_at,
        }
    }
}
