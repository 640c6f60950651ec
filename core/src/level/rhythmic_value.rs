#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum RhythmicValueType {
  WholeNote,
  HalfNote,
  EighthNote,
  SixteenthNote,
  WholeRest,
  HalfRest,
  EighthRest,
  SixteenthRest,
  Tuple,
}

/// A note or a rest.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RhythmicValue {
  value_type: RhythmicValueType,
  is_dotted: bool,
  has_tie: bool,
}

impl RhythmicValue {
  pub fn new(value_type: RhythmicValueType) -> RhythmicValue {
    RhythmicValue {
      value_type,
      is_dotted: false,
      has_tie: false,
    }
  }

  pub fn dotted(self, is_dotted: bool) -> RhythmicValue {
    RhythmicValue { is_dotted, ..self }
  }

  pub fn tied(self, has_tie: bool) -> RhythmicValue {
    RhythmicValue { has_tie, ..self }
  }

  pub fn get_type(&self) -> RhythmicValueType {
    self.value_type
  }

  pub fn is_dotted(&self) -> bool {
    self.is_dotted
  }

  pub fn has_tie(&self) -> bool {
    self.has_tie
  }
}
