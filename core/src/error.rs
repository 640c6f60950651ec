use failure::Fail;

use crate::level::MeasureId;
use crate::time::SubBeat;

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum LevelError {
  #[fail(
    display = "Measure {} does not reference an existing measure, the level has {} measures",
    measure_id, count
  )]
  MeasureOutOfRange { measure_id: MeasureId, count: usize },

  #[fail(
    display = "Sub-beat {} lies outside measure {}, which has {} sub-beats",
    sub_beat, measure_id, len
  )]
  SubBeatOutOfRange {
    measure_id: MeasureId,
    sub_beat: SubBeat,
    len: u32,
  },

  #[fail(display = "The bpm {} is not valid", bpm)]
  InvalidBpm { bpm: u16 },

  #[fail(display = "The song offset {} is not valid", offset)]
  InvalidSongOffset { offset: f32 },

  #[fail(
    display = "The time signature {}/{} is not valid",
    num_beats, note_value
  )]
  InvalidTimeSignature { num_beats: u8, note_value: u8 },

  #[fail(display = "A level needs at least one measure")]
  NoMeasures,
}

#[cfg(test)]
mod test {

  use super::LevelError;

  #[test]
  pub fn display_measure_out_of_range() {
    let error = LevelError::MeasureOutOfRange {
      measure_id: 3,
      count: 1,
    };
    assert_eq!(
      error.to_string(),
      "Measure 3 does not reference an existing measure, the level has 1 measures"
    );
  }

  #[test]
  pub fn display_sub_beat_out_of_range() {
    let error = LevelError::SubBeatOutOfRange {
      measure_id: 0,
      sub_beat: 96,
      len: 96,
    };
    assert_eq!(
      error.to_string(),
      "Sub-beat 96 lies outside measure 0, which has 96 sub-beats"
    );
  }
}
