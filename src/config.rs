// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use flashdeck_core::DEFAULT_SET_NAME;
use flashdeck_core::ErrorReport;
use flashdeck_core::Fallible;
use flashdeck_core::fail;
use log::debug;
use serde::Deserialize;

/// Looked for in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "flashdeck.toml";

/// Used when neither `--library` nor the config file names a library.
pub const DEFAULT_LIBRARY_FILE: &str = "flashdeck.db";

/// Settings read from `flashdeck.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the library database.
    library: Option<PathBuf>,
    /// Name given to new sets when `--name` is not passed.
    default_set_name: Option<String>,
}

impl Config {
    /// Load the config. An explicit path must exist; the default file is
    /// optional.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return fail(format!("config file {} does not exist.", path.display()));
                }
                Self::read(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(path)
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using defaults.");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Fallible<Self> {
        debug!("Reading config from {}.", path.display());
        Self::parse(&read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Fallible<Self> {
        toml::from_str(text).map_err(|e| ErrorReport::wrap("failed to parse config", e))
    }

    /// The library path: the flag wins over the config file.
    pub fn library_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.library.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE))
    }

    pub fn default_set_name(&self) -> &str {
        self.default_set_name.as_deref().unwrap_or(DEFAULT_SET_NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_empty_config() -> Fallible<()> {
        let config = Config::parse("")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.default_set_name(), "My Flashcard Set");
        assert_eq!(config.library_path(None), PathBuf::from("flashdeck.db"));
        Ok(())
    }

    #[test]
    fn test_full_config() -> Fallible<()> {
        let config = Config::parse(
            r#"
            library = "/srv/cards/library.db"
            default_set_name = "Inbox"
            "#,
        )?;
        assert_eq!(config.default_set_name(), "Inbox");
        assert_eq!(
            config.library_path(None),
            PathBuf::from("/srv/cards/library.db")
        );
        assert_eq!(
            config.library_path(Some(PathBuf::from("other.db"))),
            PathBuf::from("other.db")
        );
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Config::parse("colour = \"blue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("./derpherp.toml")));
        assert_eq!(
            result,
            Err(ErrorReport::new(
                "config file ./derpherp.toml does not exist."
            ))
        );
    }

    #[test]
    fn test_load_from_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("flashdeck.toml");
        write(&path, "default_set_name = \"Vocab\"\n")?;
        let config = Config::load(Some(&path))?;
        assert_eq!(config.default_set_name(), "Vocab");
        Ok(())
    }
}
