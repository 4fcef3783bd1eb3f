use aula_entity::user::{Model as UserModel, Role as RoleModel};

use crate::convert::{FromDbModel, FromModel};
use crate::user::{Role, User};

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Student => Role::Student,
            RoleModel::Instructor => Role::Instructor,
            RoleModel::Admin => Role::Admin,
        }
    }
}

impl FromModel<Role> for RoleModel {
    fn from_model(model: Role) -> Self {
        match model {
            Role::Student => RoleModel::Student,
            Role::Instructor => RoleModel::Instructor,
            Role::Admin => RoleModel::Admin,
        }
    }
}

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            user_id: model.id,
            email: model.email,
            role: Role::from_db_model(model.role),
            created_at: model.created_at,
        }
    }
}
