//! Translation of exported records into destination terms.

use mig_client::NewUser;
use mig_core::{Course, IdMaps, Result as CoreErrorResult, User};
use mig_package::CoursePatch;

/// Random 128-bit password, hex encoded
pub fn generate_password() -> String {
    rand::random::<[u8; 16]>()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Registration body for a user missing at the destination.
///
/// Fails when any of the user's roles has no destination mapping.
pub fn new_user(user: &User, maps: &IdMaps) -> CoreErrorResult<NewUser> {
    let roles = user
        .roles
        .iter()
        .map(|role| maps.role_id(&role.id).map(str::to_string))
        .collect::<CoreErrorResult<Vec<_>>>()?;

    Ok(NewUser {
        email: user.email.clone(),
        password: generate_password(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        roles,
    })
}

/// Course metadata with every user reference translated to a destination id
pub fn course_patch(course: &Course, maps: &IdMaps) -> CoreErrorResult<CoursePatch> {
    let share_with_users = course
        .shared_with_users
        .as_ref()
        .map(|users| {
            users
                .iter()
                .map(|user| maps.user_id(user).map(str::to_string))
                .collect::<CoreErrorResult<Vec<_>>>()
        })
        .transpose()?;

    let created_by = course
        .created_by
        .as_ref()
        .map(|user| maps.user_id(user).map(str::to_string))
        .transpose()?;

    Ok(CoursePatch {
        is_shared: course.is_shared,
        share_with_users,
        hero_image: course.hero_image.clone(),
        created_by,
    })
}
