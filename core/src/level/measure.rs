use std::collections::BTreeMap;

use crate::level::{RhythmicValue, Trigger, TriggerId};
use crate::time::{Signature, SubBeat, SubBeatGrid};

pub type RhythmicValues = BTreeMap<SubBeat, RhythmicValue>;

pub type Triggers = BTreeMap<SubBeat, Vec<Trigger>>;

/// A signature scoped container of rhythmic values and triggers, keyed by sub-beat.
///
/// Keys are only checked against the signature by the controllers, the measure itself
/// trusts its callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
  signature: Signature,
  rhythmic_values: RhythmicValues,
  triggers: Triggers,
}

impl Measure {
  pub fn new(signature: Signature) -> Measure {
    Measure::from_parts(signature, RhythmicValues::new(), Triggers::new())
  }

  pub fn from_parts(
    signature: Signature,
    rhythmic_values: RhythmicValues,
    triggers: Triggers,
  ) -> Measure {
    Measure {
      signature,
      rhythmic_values,
      triggers,
    }
  }

  pub fn get_signature(&self) -> Signature {
    self.signature
  }

  pub fn grid(&self) -> SubBeatGrid {
    SubBeatGrid::for_signature(&self.signature)
  }

  pub fn get_rhythmic_values(&self) -> &RhythmicValues {
    &self.rhythmic_values
  }

  pub fn get_triggers(&self) -> &Triggers {
    &self.triggers
  }

  pub fn has_no_rhythmic_values(&self) -> bool {
    self.rhythmic_values.is_empty()
  }

  pub fn has_no_triggers(&self) -> bool {
    self.triggers.is_empty()
  }

  pub fn is_empty(&self) -> bool {
    self.has_no_triggers() && self.has_no_rhythmic_values()
  }

  /// First key in either map that does not fit the signature.
  pub fn first_misplaced_sub_beat(&self) -> Option<SubBeat> {
    let grid = self.grid();
    self
      .rhythmic_values
      .keys()
      .chain(self.triggers.keys())
      .find(|sub_beat| !grid.contains(**sub_beat))
      .cloned()
  }

  pub(crate) fn set_signature(&mut self, signature: Signature) {
    self.signature = signature;
  }

  pub(crate) fn push_trigger(&mut self, sub_beat: SubBeat, trigger: Trigger) {
    self
      .triggers
      .entry(sub_beat)
      .and_modify(|sub_beat_triggers| sub_beat_triggers.push(trigger))
      .or_insert_with(|| vec![trigger]);
  }

  pub(crate) fn remove_trigger(&mut self, sub_beat: SubBeat, trigger_id: TriggerId) -> bool {
    let sub_beat_triggers = match self.triggers.get_mut(&sub_beat) {
      Some(sub_beat_triggers) => sub_beat_triggers,
      None => return false,
    };

    let index = sub_beat_triggers
      .iter()
      .position(|trigger| trigger.get_id() == trigger_id);

    match index {
      Some(index) => {
        sub_beat_triggers.remove(index);
        if sub_beat_triggers.is_empty() {
          self.triggers.remove(&sub_beat);
        }
        true
      }
      None => false,
    }
  }

  pub(crate) fn triggers_at(&self, sub_beat: SubBeat) -> &[Trigger] {
    self
      .triggers
      .get(&sub_beat)
      .map(|sub_beat_triggers| sub_beat_triggers.as_slice())
      .unwrap_or(&[])
  }

  pub(crate) fn insert_rhythmic_value(&mut self, sub_beat: SubBeat, value: RhythmicValue) {
    self.rhythmic_values.insert(sub_beat, value);
  }

  pub(crate) fn remove_rhythmic_value(&mut self, sub_beat: SubBeat) -> bool {
    self.rhythmic_values.remove(&sub_beat).is_some()
  }

  pub(crate) fn rhythmic_value_at(&self, sub_beat: SubBeat) -> Option<&RhythmicValue> {
    self.rhythmic_values.get(&sub_beat)
  }

  pub(crate) fn update_rhythmic_value<F>(&mut self, sub_beat: SubBeat, update: F)
  where
    F: FnOnce(RhythmicValue) -> RhythmicValue,
  {
    if let Some(value) = self.rhythmic_values.get_mut(&sub_beat) {
      *value = update(*value);
    }
  }
}
