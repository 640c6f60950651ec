use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo(u16);

impl Tempo {
  pub fn new(value: u16) -> Tempo {
    Tempo(value)
  }

  pub fn get_value(&self) -> u16 {
    self.0
  }

  pub fn is_valid(&self) -> bool {
    self.0 > 0
  }
}

impl Default for Tempo {
  fn default() -> Tempo {
    Tempo(120)
  }
}
