use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable that overrides the API base URL from the config file
pub const API_URL_ENV: &str = "EMPREG_API_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub api: ApiConfig,
  /// Custom title for header (defaults to "Employee registry" if not set)
  pub title: Option<String>,
  #[serde(default)]
  pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// Base URL of the employee API, e.g. "http://localhost:5000"
  pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
  /// EnvFilter directive used when RUST_LOG is not set
  pub level: Option<String>,
  /// Directory for log files (defaults to the platform data dir)
  pub dir: Option<PathBuf>,
}

impl Config {
  /// Load configuration from file, then apply URL overrides.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./empreg.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/empreg/config.yaml
  ///
  /// Without a config file, a URL from `--url` or `EMPREG_API_URL` is enough.
  pub fn load(explicit_path: Option<&Path>, url_override: Option<String>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    let env_url = std::env::var(API_URL_ENV).ok();

    let config = match path {
      Some(p) => Self::load_from_path(&p)?,
      None => match url_override.clone().or_else(|| env_url.clone()) {
        Some(url) => Self::with_url(url),
        None => {
          return Err(eyre!(
            "No configuration file found. Create one at ~/.config/empreg/config.yaml,\n\
             pass --url, or set {}. See config.example.yaml for the format.",
            API_URL_ENV
          ))
        }
      },
    };

    let config = config.with_overrides(url_override, env_url);
    config.validate()?;
    Ok(config)
  }

  /// Config with only an API URL and defaults for everything else
  pub fn with_url(url: String) -> Self {
    Config {
      api: ApiConfig { url },
      title: None,
      log: LogConfig::default(),
    }
  }

  /// Apply URL overrides. The command line wins over the environment.
  pub fn with_overrides(self, cli_url: Option<String>, env_url: Option<String>) -> Self {
    match cli_url.or(env_url) {
      Some(url) => Config {
        api: ApiConfig { url },
        ..self
      },
      None => self,
    }
  }

  /// Check that the API URL is an absolute http(s) URL.
  pub fn validate(&self) -> Result<()> {
    let url = Url::parse(&self.api.url)
      .map_err(|e| eyre!("Invalid API url {:?}: {}", self.api.url, e))?;

    match url.scheme() {
      "http" | "https" => Ok(()),
      other => Err(eyre!(
        "Unsupported API url scheme {:?} (expected http or https)",
        other
      )),
    }
  }

  /// Title shown in the header
  pub fn title(&self) -> &str {
    self.title.as_deref().unwrap_or("Employee registry")
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("empreg.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("empreg").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    Self::from_yaml(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
  }

  pub fn from_yaml(contents: &str) -> Result<Self> {
    let config: Config = serde_yaml::from_str(contents)?;
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_full_config() {
    let config = Config::from_yaml(
      "api:\n  url: http://localhost:5000\ntitle: Staff\nlog:\n  level: debug\n  dir: /tmp/logs\n",
    )
    .unwrap();

    assert_eq!(config.api.url, "http://localhost:5000");
    assert_eq!(config.title(), "Staff");
    assert_eq!(config.log.level.as_deref(), Some("debug"));
    assert_eq!(config.log.dir, Some(PathBuf::from("/tmp/logs")));
  }

  #[test]
  fn test_parse_minimal_config() {
    let config = Config::from_yaml("api:\n  url: https://api.example.com\n").unwrap();
    assert_eq!(config.title(), "Employee registry");
    assert!(config.log.level.is_none());
    assert!(config.log.dir.is_none());
  }

  #[test]
  fn test_missing_api_section_fails() {
    assert!(Config::from_yaml("title: Staff\n").is_err());
  }

  #[test]
  fn test_cli_url_wins_over_env() {
    let config = Config::with_url("http://file".to_string()).with_overrides(
      Some("http://cli".to_string()),
      Some("http://env".to_string()),
    );
    assert_eq!(config.api.url, "http://cli");
  }

  #[test]
  fn test_env_url_wins_over_file() {
    let config = Config::with_url("http://file".to_string())
      .with_overrides(None, Some("http://env".to_string()));
    assert_eq!(config.api.url, "http://env");
  }

  #[test]
  fn test_no_overrides_keeps_file_url() {
    let config = Config::with_url("http://file".to_string()).with_overrides(None, None);
    assert_eq!(config.api.url, "http://file");
  }

  #[test]
  fn test_validate_accepts_http_and_https() {
    assert!(Config::with_url("http://localhost:5000".to_string())
      .validate()
      .is_ok());
    assert!(Config::with_url("https://api.example.com/base".to_string())
      .validate()
      .is_ok());
  }

  #[test]
  fn test_validate_rejects_bad_urls() {
    assert!(Config::with_url("ftp://example.com".to_string())
      .validate()
      .is_err());
    assert!(Config::with_url("not a url".to_string())
      .validate()
      .is_err());
  }

  #[test]
  fn test_explicit_missing_path_is_error() {
    let result = Config::load(Some(Path::new("/definitely/not/here.yaml")), None);
    assert!(result.is_err());
  }
}
