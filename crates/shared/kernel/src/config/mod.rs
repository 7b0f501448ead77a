use config::{Config, Environment, File};
use qhub_domain::config::AssessmentConfig;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides, e.g. `QHUB__ASSESSMENT__LIMITS__POINTS_MAX`.
pub const ENV_PREFIX: &str = "QHUB";

/// Custom error type for config loading.
#[qhub_derive::qhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a required base file plus environment overrides.
///
/// 1. **Base File**: settings from `path`, defaulting to `quizhub` in the working directory
///    (the format is picked from the extension, or probed when there is none).
/// 2. **Environment Overrides**: variables prefixed with `QHUB__`; nested keys use double
///    underscores (`QHUB__ASSESSMENT__LIMITS__TITLE_MAX_LEN` maps to `assessment.limits.title_max_len`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use qhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("quizhub"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Sections {
    assessment: AssessmentConfig,
}

/// Loads the `[assessment]` section and checks that its limits are consistent.
///
/// A file without that section yields [`AssessmentConfig::default`].
///
/// # Errors
/// Returns [`ConfigError::Config`] on load failures and [`ConfigError::Invalid`] when the
/// configured limits contradict each other.
pub fn load_assessment_config(path: Option<impl AsRef<Path>>) -> Result<AssessmentConfig, ConfigError> {
    let sections: Sections = load_config(path)?;

    sections.assessment.limits.check().map_err(|message| ConfigError::Invalid {
        message: message.into(),
        context: Some("assessment.limits".into()),
    })?;

    Ok(sections.assessment)
}
