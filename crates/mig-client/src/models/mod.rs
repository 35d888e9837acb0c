mod created_user;
mod destination_course;
mod destination_role;
mod destination_user;
mod new_user;

pub use created_user::CreatedUser;
pub use destination_course::DestinationCourse;
pub use destination_role::DestinationRole;
pub use destination_user::DestinationUser;
pub use new_user::NewUser;
