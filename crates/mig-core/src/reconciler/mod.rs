pub mod email_index;
pub mod role_hints;
