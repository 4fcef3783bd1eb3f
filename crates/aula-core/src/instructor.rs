use aula_db::{course, instructor, user};
use aula_entity::instructor::{ActiveModel, Model};
use aula_entity::user::Role;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

pub struct NewInstructor {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

pub struct InstructorPatch {
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

pub async fn get_instructor(conn: &DatabaseConnection, id: i32) -> Result<Model, ServiceError> {
    instructor::Query::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::not_found("instructor", id))
}

pub async fn list_instructors(conn: &DatabaseConnection) -> Result<Vec<Model>, ServiceError> {
    Ok(instructor::Query::find_all(conn).await?)
}

pub async fn create_instructor(conn: &DatabaseConnection, new: NewInstructor) -> Result<Model, ServiceError> {
    check_linkable_user(conn, new.user_id, None).await?;

    let instructor = instructor::Mutation::create(
        conn,
        new.user_id,
        &new.first_name,
        &new.last_name,
        new.bio,
        new.profile_picture,
    )
    .await
    .map_err(|err| {
        ServiceError::on_unique(
            err,
            format!("user {} is already linked to an instructor profile", new.user_id),
        )
    })?;
    tracing::info!(
        instructor_id = instructor.id,
        user_id = instructor.user_id,
        "created instructor profile"
    );
    Ok(instructor)
}

pub async fn update_instructor(
    conn: &DatabaseConnection,
    id: i32,
    patch: InstructorPatch,
) -> Result<Model, ServiceError> {
    let current = get_instructor(conn, id).await?;

    let mut instructor = ActiveModel {
        id: Unchanged(id),
        ..Default::default()
    };
    if let Some(user_id) = patch.user_id {
        if user_id != current.user_id {
            check_linkable_user(conn, user_id, Some(id)).await?;
        }
        instructor.user_id = Set(user_id);
    }
    if let Some(first_name) = patch.first_name {
        instructor.first_name = Set(first_name);
    }
    if let Some(last_name) = patch.last_name {
        instructor.last_name = Set(last_name);
    }
    if let Some(bio) = patch.bio {
        instructor.bio = Set(Some(bio));
    }
    if let Some(profile_picture) = patch.profile_picture {
        instructor.profile_picture = Set(Some(profile_picture));
    }

    instructor::Mutation::update(conn, instructor)
        .await
        .map_err(|err| {
            ServiceError::on_unique(err, "that user is already linked to an instructor profile".to_owned())
        })
}

pub async fn delete_instructor(conn: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let _ = get_instructor(conn, id).await?;

    let courses = course::Query::count_by_instructor(conn, id).await?;
    if courses > 0 {
        return Err(ServiceError::Conflict(format!(
            "instructor {id} still has {courses} course(s)"
        )));
    }

    instructor::Mutation::delete(conn, id).await?;
    Ok(())
}

async fn check_linkable_user(
    conn: &DatabaseConnection,
    user_id: i32,
    relinking: Option<i32>,
) -> Result<(), ServiceError> {
    let user = user::Query::find_by_id(conn, user_id)
        .await?
        .ok_or(ServiceError::missing_reference("user", user_id))?;
    if user.role != Role::Instructor {
        return Err(ServiceError::Validation(format!(
            "user {user_id} does not have the instructor role"
        )));
    }
    if let Some(linked) = instructor::Query::find_by_user_id(conn, user_id).await? {
        if relinking != Some(linked.id) {
            return Err(ServiceError::Conflict(format!(
                "user {user_id} is already linked to instructor {}",
                linked.id
            )));
        }
    }
    Ok(())
}
