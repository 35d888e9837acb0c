use std::collections::BTreeMap;

/// Legacy role name → destination role short name
const DEFAULT_ROLE_HINTS: [(&str, &str); 3] = [
    ("Authenticated User", "authuser"),
    ("Course Creator", "contentcreator"),
    ("Super Admin", "superuser"),
];

/// Lookup table used to pre-select a destination role for each source role.
#[derive(Debug, Clone)]
pub struct RoleHints {
    hints: BTreeMap<String, String>,
}

impl Default for RoleHints {
    fn default() -> Self {
        Self {
            hints: DEFAULT_ROLE_HINTS
                .iter()
                .map(|(source, destination)| (source.to_string(), destination.to_string()))
                .collect(),
        }
    }
}

impl RoleHints {
    /// Defaults plus extra entries; extras win on conflict.
    pub fn with_extra(extra: &BTreeMap<String, String>) -> Self {
        let mut hints = Self::default();
        hints
            .hints
            .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        hints
    }

    pub fn hint(&self, source_name: &str) -> Option<&str> {
        self.hints.get(source_name).map(String::as_str)
    }

    /// Index of the destination role to pre-select, `0` when nothing matches.
    pub fn suggest<'a>(
        &self,
        source_name: &str,
        destination_short_names: impl IntoIterator<Item = &'a str>,
    ) -> usize {
        let Some(hint) = self.hint(source_name) else {
            return 0;
        };

        destination_short_names
            .into_iter()
            .position(|short_name| short_name == hint)
            .unwrap_or(0)
    }
}
