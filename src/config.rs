use serde::{Deserialize, Serialize};

use crate::hierarchy::{HierarchyPolicy, Organization, RootPolicy};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Per-organization hierarchy policies
    #[serde(default = "default_hierarchy")]
    pub hierarchy: Vec<HierarchyConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,
    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database name
    #[serde(default = "default_db_name", rename = "database")]
    pub name: String,
    /// Database user
    #[serde(default = "default_db_user", rename = "username")]
    pub user: String,
    /// Database password
    #[serde(default)]
    pub password: String,
    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a cached response in seconds (default: 24 hours)
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    /// How often expired entries are swept, in seconds
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            purge_interval_secs: default_purge_interval(),
        }
    }
}

/// Hierarchy policy for one organization
///
/// ```toml
/// [[hierarchy]]
/// organization = "MCG"
/// root_container = 2
/// priority = ["Mayor", "Municipal Commissioner"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HierarchyConfig {
    pub organization: Organization,
    /// Id of the record whose direct children are the roots; unset means
    /// parentless records are the roots
    #[serde(default)]
    pub root_container: Option<i64>,
    /// Name markers shown ahead of their siblings, strongest first
    #[serde(default)]
    pub priority: Vec<String>,
}

impl From<&HierarchyConfig> for HierarchyPolicy {
    fn from(config: &HierarchyConfig) -> Self {
        let root = match config.root_container {
            Some(id) => RootPolicy::Container(id),
            None => RootPolicy::NullParent,
        };
        HierarchyPolicy {
            root,
            priority: config.priority.clone(),
        }
    }
}

// Default value functions
fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "haryana_ulb".to_string()
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_cache_ttl() -> u64 {
    24 * 60 * 60
}

fn default_purge_interval() -> u64 {
    60 * 60
}

// MCG rows hang off the corporation record (id 2) rather than carrying a NULL parent
fn default_hierarchy() -> Vec<HierarchyConfig> {
    vec![HierarchyConfig {
        organization: Organization::Mcg,
        root_container: Some(2),
        priority: vec!["Mayor".to_string(), "Municipal Commissioner".to_string()],
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            log: LogConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            hierarchy: default_hierarchy(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            user: default_db_user(),
            password: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Generate database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build policy for `organization`; organizations without an entry use the default
    pub fn policy_for(&self, organization: Organization) -> HierarchyPolicy {
        self.hierarchy
            .iter()
            .find(|h| h.organization == organization)
            .map(HierarchyPolicy::from)
            .unwrap_or_default()
    }
}
