use crate::errors::ReporterError;
use tracing::debug;

/// API credentials for the two external services. Resolved once at startup
/// and passed into the clients explicitly; nothing reads the environment
/// after this point.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub fda_api_key: String,
    pub openai_api_key: String,
}

impl Credentials {
    /// Resolve both keys, preferring CLI overrides over the process
    /// environment. Fails before any network activity if either is absent.
    pub fn resolve(
        fda_override: Option<&str>,
        openai_override: Option<&str>,
    ) -> Result<Self, ReporterError> {
        Ok(Self {
            fda_api_key: fda_api_key(fda_override)?,
            openai_api_key: openai_api_key(openai_override)?,
        })
    }
}

/// FDA key only; the offline `summary` command never needs the OpenAI key.
pub fn fda_api_key(override_value: Option<&str>) -> Result<String, ReporterError> {
    required_key(override_value, "FDA_API_KEY")
}

pub fn openai_api_key(override_value: Option<&str>) -> Result<String, ReporterError> {
    required_key(override_value, "OPENAI_API_KEY")
}

fn required_key(override_value: Option<&str>, var_name: &str) -> Result<String, ReporterError> {
    load_dotenv();

    let value = override_value
        .map(|v| v.to_string())
        .or_else(|| std::env::var(var_name).ok())
        .unwrap_or_default();

    if value.trim().is_empty() {
        return Err(ReporterError::MissingCredential(format!(
            "{} is not set (add it to .env or pass the CLI flag)",
            var_name
        )));
    }
    Ok(value)
}

/// Merge a `.env` file in the working directory into the environment.
/// Already-set variables win.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        debug!("Loaded .env file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_env() {
        std::env::set_var("TEST_REPORTER_KEY", "from-env");
        assert_eq!(
            required_key(Some("from-cli"), "TEST_REPORTER_KEY").unwrap(),
            "from-cli"
        );
        std::env::remove_var("TEST_REPORTER_KEY");
    }

    #[test]
    fn test_env_fallback() {
        std::env::set_var("TEST_REPORTER_KEY_ENV", "secret123");
        assert_eq!(
            required_key(None, "TEST_REPORTER_KEY_ENV").unwrap(),
            "secret123"
        );
        std::env::remove_var("TEST_REPORTER_KEY_ENV");
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = required_key(None, "TEST_REPORTER_NONEXISTENT_KEY").unwrap_err();
        assert!(matches!(err, ReporterError::MissingCredential(_)));
    }

    #[test]
    fn test_blank_override_rejected() {
        let err = required_key(Some("   "), "TEST_REPORTER_BLANK_KEY").unwrap_err();
        assert!(matches!(err, ReporterError::MissingCredential(_)));
    }
}
