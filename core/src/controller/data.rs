use log::{debug, trace};

use crate::error::LevelError;
use crate::level::{
  LevelData, Measure, MeasureId, RhythmicValue, RhythmicValueType, RhythmicValues, Trigger,
  TriggerId, TriggerType, Triggers,
};
use crate::time::{Signature, SubBeat};

/// A measure and a sub-beat that have been checked against the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
  measure_id: MeasureId,
  sub_beat: SubBeat,
}

/// Validating access to the measures of a level.
///
/// Every operation that addresses a measure or a sub-beat checks it first and fails with
/// [`LevelError::MeasureOutOfRange`] or [`LevelError::SubBeatOutOfRange`] before touching
/// anything. Finding nothing at a valid position is not an error.
pub struct LevelDataController<'a> {
  data: &'a mut LevelData,
}

impl<'a> LevelDataController<'a> {
  pub(crate) fn new(data: &'a mut LevelData) -> LevelDataController<'a> {
    LevelDataController { data }
  }

  // Triggers

  /// Appends a new trigger at the given position and returns it, so that it can be
  /// removed later by its id.
  pub fn add_trigger(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
    trigger_type: TriggerType,
  ) -> Result<Trigger, LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    let trigger = Trigger::new(trigger_type);
    self.measure_mut(position).push_trigger(position.sub_beat, trigger);
    debug!(
      "Added {:?} trigger {:?} at {}:{}",
      trigger_type,
      trigger.get_id(),
      measure_id,
      sub_beat
    );
    Ok(trigger)
  }

  /// Removes the first trigger at the given position with a matching id.
  pub fn remove_trigger(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
    trigger_id: TriggerId,
  ) -> Result<bool, LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    let removed = self
      .measure_mut(position)
      .remove_trigger(position.sub_beat, trigger_id);
    debug!(
      "Remove trigger {:?} at {}:{} -> {}",
      trigger_id, measure_id, sub_beat, removed
    );
    Ok(removed)
  }

  pub fn get_triggers_on_measure(&self, measure_id: MeasureId) -> Result<&Triggers, LevelError> {
    self.measure(measure_id).map(Measure::get_triggers)
  }

  /// Triggers at the given position in insertion order, empty if there are none.
  pub fn get_triggers_at_position(
    &self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
  ) -> Result<&[Trigger], LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    Ok(self.measure_at(position).triggers_at(position.sub_beat))
  }

  // Rhythmic values

  /// Stores a new rhythmic value at the given position, replacing any previous one.
  pub fn add_rhythmic_value(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
    value_type: RhythmicValueType,
  ) -> Result<RhythmicValue, LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    let value = RhythmicValue::new(value_type);
    self
      .measure_mut(position)
      .insert_rhythmic_value(position.sub_beat, value);
    debug!("Added {:?} at {}:{}", value_type, measure_id, sub_beat);
    Ok(value)
  }

  pub fn remove_rhythmic_value(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
  ) -> Result<bool, LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    let removed = self
      .measure_mut(position)
      .remove_rhythmic_value(position.sub_beat);
    debug!(
      "Remove rhythmic value at {}:{} -> {}",
      measure_id, sub_beat, removed
    );
    Ok(removed)
  }

  pub fn get_rhythmic_values_on_measure(
    &self,
    measure_id: MeasureId,
  ) -> Result<&RhythmicValues, LevelError> {
    self.measure(measure_id).map(Measure::get_rhythmic_values)
  }

  pub fn get_rhythmic_value_at_position(
    &self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
  ) -> Result<Option<&RhythmicValue>, LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    Ok(self.measure_at(position).rhythmic_value_at(position.sub_beat))
  }

  /// Does nothing if there is no rhythmic value at the given position.
  pub fn set_rhythmic_value_is_dotted_at_position(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
    is_dotted: bool,
  ) -> Result<(), LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    self
      .measure_mut(position)
      .update_rhythmic_value(position.sub_beat, |value| value.dotted(is_dotted));
    Ok(())
  }

  /// Does nothing if there is no rhythmic value at the given position.
  pub fn set_rhythmic_value_has_tie_at_position(
    &mut self,
    measure_id: MeasureId,
    sub_beat: SubBeat,
    has_tie: bool,
  ) -> Result<(), LevelError> {
    let position = self.position(measure_id, sub_beat)?;
    self
      .measure_mut(position)
      .update_rhythmic_value(position.sub_beat, |value| value.tied(has_tie));
    Ok(())
  }

  // Time signatures

  pub fn get_time_signature_of_measure(
    &self,
    measure_id: MeasureId,
  ) -> Result<Signature, LevelError> {
    self.measure(measure_id).map(Measure::get_signature)
  }

  /// Changes the signature of a measure, only if it is empty.
  ///
  /// Never fails: an unknown measure, a measure with content or an invalid signature
  /// all report `false` and leave the level untouched. Later measures keep their own
  /// signatures.
  pub fn change_time_signature_of_measure(
    &mut self,
    measure_id: MeasureId,
    signature: Signature,
  ) -> bool {
    if !signature.is_valid() || !self.measure_is_empty(measure_id).unwrap_or(false) {
      return false;
    }

    self.data.measures[measure_id].set_signature(signature);
    debug!(
      "Changed signature of measure {} to {}/{}",
      measure_id,
      signature.get_num_beats(),
      signature.get_note_value()
    );
    true
  }

  // Measures

  /// A copy of every measure in the level.
  pub fn get_measures(&self) -> Vec<Measure> {
    self.data.measures.clone()
  }

  pub fn measure_count(&self) -> usize {
    self.data.measures.len()
  }

  /// Appends an empty measure with the signature of the current last measure.
  pub fn add_empty_measure(&mut self) {
    let signature = self
      .data
      .measures
      .last()
      .map_or_else(Signature::default, Measure::get_signature);
    self.data.measures.push(Measure::new(signature));
    debug!("Added measure {}", self.data.measures.len() - 1);
  }

  /// Removes the last measure if it is empty and is not the only one left.
  pub fn remove_empty_measure(&mut self) -> bool {
    let count = self.data.measures.len();
    if count <= 1 || !self.data.measures[count - 1].is_empty() {
      return false;
    }

    self.data.measures.pop();
    debug!("Removed measure {}", count - 1);
    true
  }

  pub fn measure_is_empty(&self, measure_id: MeasureId) -> Result<bool, LevelError> {
    Ok(
      self.measure_has_no_triggers(measure_id)?
        && self.measure_has_no_rhythmic_values(measure_id)?,
    )
  }

  pub fn measure_has_no_triggers(&self, measure_id: MeasureId) -> Result<bool, LevelError> {
    self.measure(measure_id).map(Measure::has_no_triggers)
  }

  pub fn measure_has_no_rhythmic_values(&self, measure_id: MeasureId) -> Result<bool, LevelError> {
    self.measure(measure_id).map(Measure::has_no_rhythmic_values)
  }

  // Validation

  pub fn is_proper_measure(&self, measure_id: MeasureId) -> bool {
    measure_id < self.data.measures.len()
  }

  /// Only meaningful for a proper measure, any sub-beat of an unknown measure is improper.
  pub fn is_proper_sub_beat(&self, measure_id: MeasureId, sub_beat: SubBeat) -> bool {
    self
      .data
      .measures
      .get(measure_id)
      .map_or(false, |measure| measure.grid().contains(sub_beat))
  }

  fn measure(&self, measure_id: MeasureId) -> Result<&Measure, LevelError> {
    let count = self.data.measures.len();
    self.data.measures.get(measure_id).ok_or_else(|| {
      trace!("Measure {} out of range ({} measures)", measure_id, count);
      LevelError::MeasureOutOfRange { measure_id, count }
    })
  }

  fn position(&self, measure_id: MeasureId, sub_beat: SubBeat) -> Result<Position, LevelError> {
    let grid = self.measure(measure_id)?.grid();
    if !grid.contains(sub_beat) {
      trace!(
        "Sub-beat {} out of range for measure {} ({} sub-beats)",
        sub_beat,
        measure_id,
        grid.len()
      );
      return Err(LevelError::SubBeatOutOfRange {
        measure_id,
        sub_beat,
        len: grid.len(),
      });
    }

    Ok(Position {
      measure_id,
      sub_beat,
    })
  }

  fn measure_at(&self, position: Position) -> &Measure {
    &self.data.measures[position.measure_id]
  }

  fn measure_mut(&mut self, position: Position) -> &mut Measure {
    &mut self.data.measures[position.measure_id]
  }
}
