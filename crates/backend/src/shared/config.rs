use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub seeds: SeedsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Which implementation of the channel data source to use
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Synthetic,
    Live,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSourceConfig {
    pub mode: SourceMode,
    /// Base URL of the live metrics API, required when mode = "live"
    #[serde(default)]
    pub live_base_url: Option<String>,
}

/// Fixed per-channel seeds for the synthetic generator.
///
/// The demo data is reproducible run-to-run only because these stay
/// constant. A seed of 0 degenerates into a constant zero stream and is
/// rejected at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedsConfig {
    #[serde(default = "default_linkedin_seed")]
    pub linkedin: u64,
    #[serde(default = "default_youtube_seed")]
    pub youtube: u64,
    #[serde(default = "default_website_seed")]
    pub website: u64,
}

fn default_linkedin_seed() -> u64 {
    42
}

fn default_youtube_seed() -> u64 {
    7
}

fn default_website_seed() -> u64 {
    1337
}

impl Default for SeedsConfig {
    fn default() -> Self {
        Self {
            linkedin: default_linkedin_seed(),
            youtube: default_youtube_seed(),
            website: default_website_seed(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[data_source]
mode = "synthetic"

[seeds]
linkedin = 42
youtube = 7
website = 1337
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                validate(&config)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    if config.seeds.linkedin == 0 || config.seeds.youtube == 0 || config.seeds.website == 0 {
        anyhow::bail!("channel seeds must be non-zero (0 degenerates the generator)");
    }
    if config.data_source.mode == SourceMode::Live && config.data_source.live_base_url.is_none() {
        anyhow::bail!("data_source.live_base_url is required when mode = \"live\"");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data_source.mode, SourceMode::Synthetic);
        assert_eq!(config.seeds.linkedin, 42);
        assert_eq!(config.seeds.youtube, 7);
        assert_eq!(config.seeds.website, 1337);
    }

    #[test]
    fn test_seeds_default_when_section_missing() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [data_source]
            mode = "synthetic"
            "#,
        )
        .unwrap();
        assert_eq!(config.seeds.linkedin, 42);
        assert_eq!(config.seeds.youtube, 7);
        assert_eq!(config.seeds.website, 1337);
    }

    #[test]
    fn test_live_mode_requires_base_url() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [data_source]
            mode = "live"
            "#,
        )
        .unwrap();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_seed_rejected() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [data_source]
            mode = "synthetic"

            [seeds]
            linkedin = 0
            "#,
        )
        .unwrap();
        assert!(validate(&config).is_err());
    }
}
