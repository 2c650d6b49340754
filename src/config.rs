use std::fmt;

/// Connection settings for one Turso database.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Database URL, `https://<db>.turso.io` or `libsql://<db>.turso.io`.
    pub service_url: String,
    /// Database auth token (JWT).
    pub credential: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("service_url", &self.service_url)
            .field("credential", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Creates a configuration from a URL and a token.
    pub fn new(service_url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            credential: credential.into(),
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads:
    /// - `TURSO_URL` — database URL
    /// - `TURSO_KEY` — database auth token
    ///
    /// Only presence is checked here; shape validation happens in
    /// [`crate::TursoClient::init`].
    pub fn from_env() -> std::result::Result<Self, String> {
        let url = std::env::var("TURSO_URL")
            .map_err(|_| "missing TURSO_URL environment variable".to_owned())?;
        let key = std::env::var("TURSO_KEY")
            .map_err(|_| "missing TURSO_KEY environment variable".to_owned())?;
        if url.trim().is_empty() {
            return Err("TURSO_URL is set but empty".to_owned());
        }
        if key.trim().is_empty() {
            return Err("TURSO_KEY is set but empty".to_owned());
        }
        Ok(Self::new(url.trim(), key.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn debug_redacts_credential() {
        let config = Config::new("https://db.turso.io", "secret.token.value");
        let debug = format!("{config:?}");
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("https://db.turso.io"));
        assert!(!debug.contains("secret.token.value"));
    }
}
