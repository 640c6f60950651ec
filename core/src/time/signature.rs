use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
  num_beats: u8,  // numerator
  note_value: u8, // denominator
}

impl Signature {
  pub fn new(num_beats: u8, note_value: u8) -> Signature {
    Signature {
      num_beats,
      note_value,
    }
  }

  pub fn get_num_beats(&self) -> u8 {
    self.num_beats
  }

  pub fn get_note_value(&self) -> u8 {
    self.note_value
  }

  /// A signature with a zero numerator or denominator has no beats to subdivide.
  pub fn is_valid(&self) -> bool {
    self.num_beats > 0 && self.note_value > 0
  }
}

impl Default for Signature {
  fn default() -> Signature {
    Signature::new(4, 4)
  }
}

#[cfg(test)]
mod test {

  use super::Signature;

  #[test]
  pub fn signature_new() {
    let signature = Signature::new(3, 4);
    assert_eq!(signature.get_num_beats(), 3);
    assert_eq!(signature.get_note_value(), 4);
  }

  #[test]
  pub fn signature_default_is_common_time() {
    assert_eq!(Signature::default(), Signature::new(4, 4));
  }

  #[test]
  pub fn signature_validity() {
    assert!(Signature::new(7, 8).is_valid());
    assert!(!Signature::new(0, 4).is_valid());
    assert!(!Signature::new(4, 0).is_valid());
  }
}
