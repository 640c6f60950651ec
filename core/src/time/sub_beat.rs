use crate::time::Signature;

/// Number of sub-beats a single beat is divided into.
///
/// The smallest subdivision of a beat is 8 (a sixteenth note in an x/2 measure), and
/// tuplets need a factor of 3 on top of that, so 8 * 3 = 24. Supporting 1/32 notes
/// would require 48, and 1/64 notes 96.
pub const SUBDIVISIONS: u32 = 24;

pub type SubBeat = u32;

/// The range of sub-beats addressable in a measure of a given signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubBeatGrid {
  len: u32,
}

impl SubBeatGrid {
  pub fn for_signature(signature: &Signature) -> SubBeatGrid {
    SubBeatGrid {
      len: u32::from(signature.get_num_beats()) * SUBDIVISIONS,
    }
  }

  pub fn len(&self) -> u32 {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn contains(&self, sub_beat: SubBeat) -> bool {
    sub_beat < self.len
  }

  pub fn last(&self) -> Option<SubBeat> {
    self.len.checked_sub(1)
  }
}
