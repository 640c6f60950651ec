pub mod config;
pub mod data;

pub use self::config::LevelConfigController;
pub use self::data::LevelDataController;

use std::sync::{Arc, RwLock};

use log::{debug, info};

use crate::config::Config;
use crate::error::LevelError;
use crate::level::{Level, LevelConfig};

/// A controller shared between threads, one lock for the whole level.
pub type LevelLock = Arc<RwLock<LevelController>>;

/// Owns a level and hands out the controllers that read and modify it.
#[derive(Debug, Clone, Default)]
pub struct LevelController {
  level: Level,
}

impl LevelController {
  /// A level with the built-in defaults: one empty 4/4 measure.
  pub fn new() -> LevelController {
    LevelController::default()
  }

  /// A level populated from the given defaults, validated and cropped the same way
  /// as when they are set one by one.
  pub fn with_config(config: &Config) -> Result<LevelController, LevelError> {
    let mut values = LevelConfig::default();
    apply_config(&mut LevelConfigController::new(&mut values), &config.level)?;

    let signature = values.initial_signature;
    let controller = LevelController {
      level: Level::new(values),
    };

    info!(
      "Created level {:?} ({}/{} at {} bpm)",
      controller.level.config.level_name,
      signature.get_num_beats(),
      signature.get_note_value(),
      controller.level.config.initial_bpm.get_value()
    );

    Ok(controller)
  }

  /// Takes over a level restored from a snapshot, as long as it is well formed.
  pub fn from_level(mut level: Level) -> Result<LevelController, LevelError> {
    let values = level.config.clone();
    apply_config(&mut LevelConfigController::new(&mut level.config), &values)?;

    if level.data.measures.is_empty() {
      return Err(LevelError::NoMeasures);
    }

    for (measure_id, measure) in level.data.measures.iter().enumerate() {
      let signature = measure.get_signature();
      if !signature.is_valid() {
        return Err(LevelError::InvalidTimeSignature {
          num_beats: signature.get_num_beats(),
          note_value: signature.get_note_value(),
        });
      }

      if let Some(sub_beat) = measure.first_misplaced_sub_beat() {
        return Err(LevelError::SubBeatOutOfRange {
          measure_id,
          sub_beat,
          len: measure.grid().len(),
        });
      }
    }

    debug!("Restored level with {} measures", level.data.measures.len());

    Ok(LevelController { level })
  }

  pub fn config(&mut self) -> LevelConfigController<'_> {
    LevelConfigController::new(&mut self.level.config)
  }

  pub fn data(&mut self) -> LevelDataController<'_> {
    LevelDataController::new(&mut self.level.data)
  }

  pub fn level(&self) -> &Level {
    &self.level
  }

  pub fn into_level(self) -> Level {
    self.level
  }
}

fn apply_config(
  config: &mut LevelConfigController,
  values: &LevelConfig,
) -> Result<(), LevelError> {
  config.set_level_name(values.level_name.as_str());
  config.set_level_author(values.author_name.as_str());
  config.set_level_description(values.level_description.as_str());
  config.set_song_name(values.song_name.as_str());
  config.set_initial_bpm(values.initial_bpm)?;
  config.set_song_offset(values.song_offset)?;
  config.set_initial_time_signature(values.initial_signature)?;
  config.set_initial_bg_color(values.initial_bg_color.clone());
  Ok(())
}
