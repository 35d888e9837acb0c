mod email_index;
mod role_hints;
