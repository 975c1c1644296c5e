//! Per-request instance credentials.

/// Instance identifier and access token supplied by the caller.
///
/// Both values are opaque. Nothing here validates them; the upstream API is
/// the only authority on whether a pair is usable.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub id_instance: String,
    pub api_token_instance: String,
}

impl Credentials {
    pub fn new(id_instance: impl Into<String>, api_token_instance: impl Into<String>) -> Self {
        Self {
            id_instance: id_instance.into(),
            api_token_instance: api_token_instance.into(),
        }
    }

    /// Extract credentials from a raw query string.
    ///
    /// The first occurrence of each key wins. Missing keys become empty strings.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut id_instance = None;
        let mut api_token_instance = None;

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "idInstance" if id_instance.is_none() => id_instance = Some(value.into_owned()),
                "apiTokenInstance" if api_token_instance.is_none() => {
                    api_token_instance = Some(value.into_owned())
                }
                _ => {}
            }
        }

        Self {
            id_instance: id_instance.unwrap_or_default(),
            api_token_instance: api_token_instance.unwrap_or_default(),
        }
    }
}

// Token never reaches logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("id_instance", &self.id_instance)
            .field("api_token_instance", &"<redacted>")
            .finish()
    }
}
