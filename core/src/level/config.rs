use serde_derive::Deserialize;

use crate::color::Color;
use crate::time::{Signature, Tempo};

/// Level metadata.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
  pub level_name: String,
  pub author_name: String,
  pub level_description: String,
  pub song_name: String,
  /// Seconds the song is offset by.
  pub song_offset: f32,
  pub initial_bpm: Tempo,
  pub initial_signature: Signature,
  pub initial_bg_color: Color,
}

impl Default for LevelConfig {
  fn default() -> LevelConfig {
    LevelConfig {
      level_name: "New Level".to_string(),
      author_name: "Author Name".to_string(),
      level_description: String::new(),
      song_name: "Song Name".to_string(),
      song_offset: 0.0,
      initial_bpm: Tempo::default(),
      initial_signature: Signature::default(),
      initial_bg_color: Color::default(),
    }
  }
}

#[cfg(test)]
mod test {

  use super::LevelConfig;
  use crate::time::{Signature, Tempo};

  #[test]
  pub fn default() {
    let config = LevelConfig::default();
    assert_eq!(config.level_name, "New Level");
    assert_eq!(config.author_name, "Author Name");
    assert_eq!(config.song_name, "Song Name");
    assert_eq!(config.level_description, "");
    assert_eq!(config.song_offset, 0.0);
    assert_eq!(config.initial_bpm, Tempo::new(120));
    assert_eq!(config.initial_signature, Signature::new(4, 4));
    assert_eq!(config.initial_bg_color.get_value(), "#000000");
  }
}
