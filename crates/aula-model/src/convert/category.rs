use aula_entity::category::Model as CategoryModel;

use crate::category::Category;
use crate::convert::FromDbModel;

impl FromDbModel<CategoryModel> for Category {
    fn from_db_model(model: CategoryModel) -> Self {
        Self {
            category_id: model.id,
            category_name: model.name,
            description: model.description,
        }
    }
}
