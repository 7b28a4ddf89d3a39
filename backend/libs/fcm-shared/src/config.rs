use std::path::PathBuf;

pub const DEFAULT_PROJECT_ID: &str = "muutsche";
pub const DEFAULT_BASE_URL: &str = "https://fcm.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_CREDENTIALS_PATH: &str = "service_account.json";
pub const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// FCM Configuration
///
/// Immutable settings shared by the token provider and the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FcmConfig {
    pub project_id: String,
    pub base_url: String,
    pub api_version: String,
    pub scopes: Vec<String>,
    pub credentials_path: PathBuf,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            scopes: vec![FIREBASE_MESSAGING_SCOPE.to_string()],
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

impl FcmConfig {
    /// Create new FCM configuration for a project, everything else defaulted
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    /// Point the sender at a different API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Set service account key location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = path.into();
        self
    }

    /// Get the messages:send endpoint for the configured project
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/projects/{}/messages:send",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            self.project_id
        )
    }
}
