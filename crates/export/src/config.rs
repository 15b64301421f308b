use std::{fs::File, time::Duration};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use canvas_client::{ClientOptions, CANVAS_BASE, DEFAULT_PER_PAGE};
use log::debug;
use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

use crate::extract::ExtractOptions;

/// University 501, Excel for Business, and a sandbox shell
pub const DEFAULT_EXCLUDED_COURSES: [u64; 3] = [873225, 1490894, 1104039];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// Course ids to skip entirely
    pub excluded_courses: Vec<u64>,
    pub output: Utf8PathBuf,
    pub per_page: u32,
    pub timeout_secs: u64,
    pub follow_pages: bool,
    pub mirror_due_into_unlock: bool,
    pub type_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: CANVAS_BASE.to_string(),
            excluded_courses: DEFAULT_EXCLUDED_COURSES.to_vec(),
            output: Utf8PathBuf::from("assignments.csv"),
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: 30,
            follow_pages: true,
            mirror_due_into_unlock: false,
            type_separator: ", ".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from `$XDG_CONFIG_HOME/canvas-export/config.json` if not given.
    ///
    /// An explicit path must exist, but a missing default config just gives the defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf().into_std_path_buf(),
            None => {
                let dirs = BaseDirectories::with_prefix("canvas-export")?;
                match dirs.find_config_file("config.json") {
                    Some(p) => p,
                    None => {
                        debug!("no config file, using defaults");
                        return Ok(Self::default());
                    }
                }
            }
        };

        debug!("loading config from {}", path.display());
        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            per_page: self.per_page,
            timeout: Duration::from_secs(self.timeout_secs),
            follow_pages: self.follow_pages,
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            type_separator: self.type_separator.clone(),
            mirror_due_into_unlock: self.mirror_due_into_unlock,
        }
    }
}
