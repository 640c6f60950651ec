use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::level::LevelConfig;

/// Values used to populate a freshly created level.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
  pub level: LevelConfig,
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}

#[cfg(test)]
mod test {

  use super::Config;
  use crate::time::{Signature, Tempo};

  #[test]
  pub fn from_str_fills_missing_values() {
    let config = Config::from_str(
      r#"
      [level]
      level_name = "Hellaven"
      initial_bpm = 96
      "#,
    )
    .unwrap();

    assert_eq!(config.level.level_name, "Hellaven");
    assert_eq!(config.level.initial_bpm, Tempo::new(96));
    assert_eq!(config.level.author_name, "Author Name");
    assert_eq!(config.level.initial_signature, Signature::new(4, 4));
  }

  #[test]
  pub fn from_str_nested_values() {
    let config = Config::from_str(
      r##"
      [level]
      song_offset = 1.5
      initial_bg_color = "#272727"

      [level.initial_signature]
      num_beats = 3
      note_value = 8
      "##,
    )
    .unwrap();

    assert_eq!(config.level.song_offset, 1.5);
    assert_eq!(config.level.initial_bg_color.get_value(), "#272727");
    assert_eq!(config.level.initial_signature, Signature::new(3, 8));
  }

  #[test]
  pub fn from_str_empty_is_default() {
    let config = Config::from_str("").unwrap();
    assert_eq!(config.level, Config::default().level);
  }

  #[test]
  pub fn from_str_rejects_malformed_toml() {
    assert!(Config::from_str("[level").is_err());
  }

  #[test]
  pub fn from_file_missing() {
    assert!(Config::from_file("/nonexistent/level.toml").is_err());
  }
}
