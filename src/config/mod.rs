use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::models::TimeUnit;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite store holding app state and cache entries.
    pub store: String,

    /// Versioned cache bucket name; bumping it is the migration path,
    /// old buckets are deleted wholesale on activation.
    #[serde(default = "default_cache_name")]
    pub cache_name: String,

    /// Origin the shell and precache paths resolve against.
    #[serde(default = "default_app_origin")]
    pub app_origin: String,

    /// Paths precached on install, relative to `app_origin`.
    #[serde(default = "default_precache")]
    pub precache: Vec<String>,

    /// Unit assumed when `add` is called without `--unit`.
    #[serde(default = "default_unit")]
    pub default_unit: TimeUnit,
}

fn default_cache_name() -> String {
    "progchek-v1".to_string()
}

fn default_app_origin() -> String {
    "https://progchek.app".to_string()
}

fn default_precache() -> Vec<String> {
    vec!["/".to_string(), "/index.html".to_string()]
}

fn default_unit() -> TimeUnit {
    TimeUnit::Hours
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            cache_name: default_cache_name(),
            app_origin: default_app_origin(),
            precache: default_precache(),
            default_unit: default_unit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("progchek")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".progchek")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("progchek.conf")
    }

    /// Return the full path of the SQLite store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("progchek.sqlite")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable (storage failures are invisible by design).
    pub fn load() -> Self {
        let path = Self::config_file();
        fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_yaml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Shell document URL, the navigation fallback target.
    pub fn shell_url(&self) -> String {
        format!("{}/index.html", self.app_origin.trim_end_matches('/'))
    }

    /// Precache paths resolved to absolute URLs.
    pub fn precache_urls(&self) -> Vec<String> {
        let origin = self.app_origin.trim_end_matches('/');
        self.precache
            .iter()
            .map(|p| {
                if p.starts_with("http://") || p.starts_with("https://") {
                    p.clone()
                } else {
                    format!("{}/{}", origin, p.trim_start_matches('/'))
                }
            })
            .collect()
    }

    /// Names of the fields a complete config file carries; used by
    /// `config --check` to report what an older file is missing.
    pub fn missing_fields(yaml: &str) -> Vec<&'static str> {
        let parsed: Result<serde_yaml::Value, _> = serde_yaml::from_str(yaml);
        let Ok(value) = parsed else {
            return vec!["store", "cache_name", "app_origin", "precache", "default_unit"];
        };
        ["store", "cache_name", "app_origin", "precache", "default_unit"]
            .into_iter()
            .filter(|field| value.get(field).is_none())
            .collect()
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store name: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if !store_path.exists() {
            fs::File::create(&store_path)?;
        }

        println!("✅ Store:       {:?}", store_path);

        Ok(())
    }
}
