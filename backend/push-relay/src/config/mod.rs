use std::path::PathBuf;

use fcm_shared::config::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_CREDENTIALS_PATH, DEFAULT_PROJECT_ID,
    FIREBASE_MESSAGING_SCOPE,
};
use fcm_shared::FcmConfig;
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "FCM_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid FCM configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("FCM_SCOPES must name at least one scope")]
    NoScopes,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fcm: FcmConfig,
}

/// `FCM_*` variables; anything unset keeps the built-in default.
#[derive(Debug, Deserialize)]
struct FcmEnv {
    #[serde(default = "default_project_id")]
    project_id: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_api_version")]
    api_version: String,
    #[serde(default = "default_scopes")]
    scopes: Vec<String>,
    #[serde(default = "default_credentials_path")]
    credentials_path: PathBuf,
}

fn default_project_id() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_scopes() -> Vec<String> {
    vec![FIREBASE_MESSAGING_SCOPE.to_string()]
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from(DEFAULT_CREDENTIALS_PATH)
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env: FcmEnv = envy::prefixed(ENV_PREFIX).from_iter(vars)?;

        let scopes: Vec<String> = env
            .scopes
            .into_iter()
            .map(|scope| scope.trim().to_string())
            .filter(|scope| !scope.is_empty())
            .collect();
        if scopes.is_empty() {
            return Err(ConfigError::NoScopes);
        }

        Ok(Config {
            fcm: FcmConfig::new(env.project_id)
                .with_base_url(env.base_url)
                .with_api_version(env.api_version)
                .with_scopes(scopes)
                .with_credentials_path(env.credentials_path),
        })
    }
}
