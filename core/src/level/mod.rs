pub mod config;
pub mod measure;
pub mod rhythmic_value;
pub mod trigger;

pub use self::config::LevelConfig;
pub use self::measure::{Measure, RhythmicValues, Triggers};
pub use self::rhythmic_value::{RhythmicValue, RhythmicValueType};
pub use self::trigger::{Trigger, TriggerId, TriggerType};

/// Zero based position of a measure in the level.
pub type MeasureId = usize;

/// The musical content of a level: an ordered sequence of measures.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
  pub(crate) measures: Vec<Measure>,
}

impl LevelData {
  pub fn get_measures(&self) -> &[Measure] {
    self.measures.as_slice()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
  pub(crate) config: LevelConfig,
  pub(crate) data: LevelData,
}

impl Level {
  /// A level holding a single empty measure in the configured initial signature.
  pub fn new(config: LevelConfig) -> Level {
    let measure = Measure::new(config.initial_signature);
    Level::from_parts(config, vec![measure])
  }

  /// Assembles a level from a snapshot. The result is only checked once it is handed
  /// to a controller.
  pub fn from_parts(config: LevelConfig, measures: Vec<Measure>) -> Level {
    Level {
      config,
      data: LevelData { measures },
    }
  }

  pub fn get_config(&self) -> &LevelConfig {
    &self.config
  }

  pub fn get_measures(&self) -> &[Measure] {
    self.data.get_measures()
  }
}

impl Default for Level {
  fn default() -> Level {
    Level::new(LevelConfig::default())
  }
}
