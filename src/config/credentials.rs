use serde::Deserialize;
use std::fmt;

/// Key under which the API token is stored in credentials.toml
pub const TOKEN_KEY: &str = "token";

/// Opaque bearer token attached to API requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep tokens out of logs and error output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct CredentialFile {
    #[serde(default)]
    pub token: Option<String>,
}
