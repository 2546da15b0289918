use crate::dock::{
    BASE_ITEM_SIZE, BASE_LIFT, EDGE_MARGIN_COLLAPSED, EDGE_MARGIN_EXPANDED, PEAK_ITEM_SIZE,
    PEAK_LIFT,
};
use crate::events::AppEvent;
use async_channel::Sender;
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Person,
    Message,
    Call,
    Camera,
    Photo,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    pub icon: Option<Icon>,
    pub label: Option<Label>,
}

/// Numeric knobs for the proximity effect and the drop-gap reservation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct DockTuning {
    pub base_size: f64,
    pub peak_size: f64,
    pub base_lift: f64,
    pub peak_lift: f64,
    pub edge_margin_collapsed: f64,
    pub edge_margin_expanded: f64,
}

impl Default for DockTuning {
    fn default() -> Self {
        Self {
            base_size: BASE_ITEM_SIZE,
            peak_size: PEAK_ITEM_SIZE,
            base_lift: BASE_LIFT,
            peak_lift: PEAK_LIFT,
            edge_margin_collapsed: EDGE_MARGIN_COLLAPSED,
            edge_margin_expanded: EDGE_MARGIN_EXPANDED,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tuning: DockTuning,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "marina").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("MARINA"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the user config, falling back to the embedded defaults when the
/// file is missing or malformed.
pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) if !c.items.is_empty() => c,
        Ok(_) => default_items_config(),
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            default_items_config()
        }
    }
}

fn default_items_config() -> Config {
    config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(config::Config::try_deserialize)
        .unwrap_or_default()
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Watches the config file and signals the host on every meaningful change.
/// The host decides whether to reload and rebuild its dock.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
