use crate::authentication::Credentials;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub credentials: CredentialSettings,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct CredentialSettings {
    pub username: String,
    pub password: Secret<String>,
}

impl CredentialSettings {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Loads `base.yaml`, then the environment-specific file, then `APP_*`
/// variables (e.g. `APP_API__BASE_URL`), each layer overriding the last.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `demo` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "demo".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    load_settings(
        &configuration_directory,
        environment,
        app_environment_variables(),
    )
}

fn app_environment_variables() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn load_settings(
    configuration_directory: &std::path::Path,
    environment: Environment,
    variables: config::Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(variables)
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environments for the check runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// The public demo deployment of the story service.
    Demo,
    Local,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Demo => "demo",
            Environment::Local => "local",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "{} is not a supported environment. Use either `demo` or `local`.",
                other
            )),
        }
    }
}
