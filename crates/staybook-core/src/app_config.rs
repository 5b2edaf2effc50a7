use std::net::SocketAddr;
use std::path::PathBuf;

use crate::offers::EmptyPricingPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Local hotel document. Ignored when `db_url` is set.
    pub db_path: PathBuf,
    /// Remote JSON endpoint serving the whole hotel document.
    pub db_url: Option<String>,
    pub remote_timeout_secs: u64,
    pub user_agent: String,
    pub empty_pricing: EmptyPricingPolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Remote URLs may carry basic-auth credentials.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("db_path", &self.db_path)
            .field("db_url", &self.db_url.as_ref().map(|_| "[redacted]"))
            .field("remote_timeout_secs", &self.remote_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("empty_pricing", &self.empty_pricing)
            .finish()
    }
}
