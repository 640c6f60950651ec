use log::debug;

use crate::color::Color;
use crate::error::LevelError;
use crate::level::LevelConfig;
use crate::time::{Signature, Tempo};

const MAX_LEVEL_NAME_LENGTH: usize = 30;
const MAX_AUTHOR_NAME_LENGTH: usize = 20;
const MAX_SONG_NAME_LENGTH: usize = 30;
const MAX_LEVEL_DESCRIPTION_LENGTH: usize = 120;

/// Validating access to the metadata of a level.
///
/// Text longer than its maximum length is cropped, never rejected.
pub struct LevelConfigController<'a> {
  config: &'a mut LevelConfig,
}

impl<'a> LevelConfigController<'a> {
  pub(crate) fn new(config: &'a mut LevelConfig) -> LevelConfigController<'a> {
    LevelConfigController { config }
  }

  pub fn get_level_name(&self) -> &str {
    self.config.level_name.as_str()
  }

  pub fn set_level_name<T>(&mut self, level_name: T)
  where
    T: Into<String>,
  {
    self.config.level_name = crop(level_name.into(), MAX_LEVEL_NAME_LENGTH);
  }

  pub fn get_level_author(&self) -> &str {
    self.config.author_name.as_str()
  }

  pub fn set_level_author<T>(&mut self, author_name: T)
  where
    T: Into<String>,
  {
    self.config.author_name = crop(author_name.into(), MAX_AUTHOR_NAME_LENGTH);
  }

  pub fn get_level_description(&self) -> &str {
    self.config.level_description.as_str()
  }

  pub fn set_level_description<T>(&mut self, level_description: T)
  where
    T: Into<String>,
  {
    self.config.level_description = crop(level_description.into(), MAX_LEVEL_DESCRIPTION_LENGTH);
  }

  pub fn get_song_name(&self) -> &str {
    self.config.song_name.as_str()
  }

  pub fn set_song_name<T>(&mut self, song_name: T)
  where
    T: Into<String>,
  {
    self.config.song_name = crop(song_name.into(), MAX_SONG_NAME_LENGTH);
  }

  pub fn get_initial_bpm(&self) -> Tempo {
    self.config.initial_bpm
  }

  pub fn set_initial_bpm(&mut self, bpm: Tempo) -> Result<(), LevelError> {
    if !bpm.is_valid() {
      return Err(LevelError::InvalidBpm {
        bpm: bpm.get_value(),
      });
    }

    self.config.initial_bpm = bpm;
    debug!("Initial bpm set to {}", bpm.get_value());
    Ok(())
  }

  /// Seconds the song is offset by.
  pub fn get_song_offset(&self) -> f32 {
    self.config.song_offset
  }

  pub fn set_song_offset(&mut self, offset: f32) -> Result<(), LevelError> {
    if !offset.is_finite() || offset < 0.0 {
      return Err(LevelError::InvalidSongOffset { offset });
    }

    self.config.song_offset = offset;
    debug!("Song offset set to {}s", offset);
    Ok(())
  }

  pub fn get_initial_time_signature(&self) -> Signature {
    self.config.initial_signature
  }

  pub fn set_initial_time_signature(&mut self, signature: Signature) -> Result<(), LevelError> {
    if !signature.is_valid() {
      return Err(LevelError::InvalidTimeSignature {
        num_beats: signature.get_num_beats(),
        note_value: signature.get_note_value(),
      });
    }

    self.config.initial_signature = signature;
    Ok(())
  }

  pub fn get_initial_bg_color(&self) -> &Color {
    &self.config.initial_bg_color
  }

  pub fn set_initial_bg_color(&mut self, color: Color) {
    self.config.initial_bg_color = color;
  }

  pub fn get_level_config(&self) -> &LevelConfig {
    &*self.config
  }
}

fn crop(mut text: String, max_chars: usize) -> String {
  if let Some((index, _)) = text.char_indices().nth(max_chars) {
    text.truncate(index);
  }
  text
}
