use std::collections::HashMap;

/// Case-insensitive index of destination users by email
#[derive(Debug, Default)]
pub struct EmailIndex {
    by_email: HashMap<String, String>,
}

impl EmailIndex {
    pub fn new<'a>(users: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            by_email: users
                .into_iter()
                .map(|(email, id)| (normalize(email), id.to_string()))
                .collect(),
        }
    }

    /// Destination id of the user registered under `email`
    pub fn find(&self, email: &str) -> Option<&str> {
        self.by_email.get(&normalize(email)).map(String::as_str)
    }

    pub fn insert(&mut self, email: &str, id: impl Into<String>) {
        self.by_email.insert(normalize(email), id.into());
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}
