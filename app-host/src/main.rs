use log::{debug, info};

use failure::{Error, Fail};

use rhythmic_core::{
  config::Config,
  level::{Level, Measure},
  LevelController, LevelError,
};

const RHYTHMIC_CONFIG: &str = "RHYTHMIC_CONFIG";
const DEFAULT_RHYTHMIC_CONFIG: &str = "level.toml";

const RHYTHMIC_LOG_CONFIG: &str = "RHYTHMIC_LOG_CONFIG";
const DEFAULT_RHYTHMIC_LOG_CONFIG: &str = "log4rs.yaml";

#[derive(Debug, Fail)]
enum MainError {
  #[fail(display = "Failed to init logging: {}", cause)]
  LoggingInit { cause: String },

  #[fail(display = "Failed to create the level: {}", cause)]
  LevelInit { cause: LevelError },
}

fn main() -> Result<(), Error> {
  init_logging()?;

  let config = init_config()?;

  let controller = init_level(&config)?;

  report(controller.level());

  Ok(())
}

fn init_logging() -> Result<(), Error> {
  let log_config_path = std::env::var(RHYTHMIC_LOG_CONFIG)
    .unwrap_or_else(|_| DEFAULT_RHYTHMIC_LOG_CONFIG.to_string());

  log4rs::init_file(log_config_path.as_str(), Default::default()).map_err(|err| {
    MainError::LoggingInit {
      cause: err.to_string(),
    }
  })?;

  Ok(())
}

fn init_config() -> Result<Config, Error> {
  let config_path =
    std::env::var(RHYTHMIC_CONFIG).unwrap_or_else(|_| DEFAULT_RHYTHMIC_CONFIG.to_string());

  info!("Loading level defaults from {} ...", config_path);
  let config = Config::from_file(config_path.as_str())?;
  debug!("{:#?}", config);

  Ok(config)
}

fn init_level(config: &Config) -> Result<LevelController, Error> {
  info!("Initialising the level ...");

  let controller =
    LevelController::with_config(config).map_err(|cause| MainError::LevelInit { cause })?;

  Ok(controller)
}

fn report(level: &Level) {
  let config = level.get_config();
  println!("{} by {}", config.level_name, config.author_name);
  println!(
    "  song: {} (offset {}s, {} bpm)",
    config.song_name,
    config.song_offset,
    config.initial_bpm.get_value()
  );
  println!("  background: {}", config.initial_bg_color.get_value());

  for (measure_id, measure) in level.get_measures().iter().enumerate() {
    println!("  {}", describe_measure(measure_id, measure));
  }
}

fn describe_measure(measure_id: usize, measure: &Measure) -> String {
  let signature = measure.get_signature();
  let num_triggers: usize = measure.get_triggers().values().map(Vec::len).sum();
  format!(
    "measure {:03} {}/{}: {} sub-beats, {} rhythmic values, {} triggers",
    measure_id + 1,
    signature.get_num_beats(),
    signature.get_note_value(),
    measure.grid().len(),
    measure.get_rhythmic_values().len(),
    num_triggers
  )
}

#[cfg(test)]
mod test {

  use rhythmic_core::level::TriggerType;
  use rhythmic_core::LevelController;

  use super::describe_measure;

  #[test]
  pub fn describe_new_measure() {
    let mut controller = LevelController::new();
    controller
      .data()
      .add_trigger(0, 0, TriggerType::Shader)
      .unwrap();
    controller
      .data()
      .add_trigger(0, 0, TriggerType::Bpm)
      .unwrap();

    let measures = controller.data().get_measures();
    assert_eq!(
      describe_measure(0, &measures[0]),
      "measure 001 4/4: 96 sub-beats, 0 rhythmic values, 2 triggers"
    );
  }
}
