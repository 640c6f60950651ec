use serde_derive::Deserialize;

/// A color in its hex representation, e.g. `#A72B27`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
  pub fn new<T>(value: T) -> Color
  where
    T: Into<String>,
  {
    Color(value.into())
  }

  pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
    Color(format!("#{:02X}{:02X}{:02X}", r, g, b))
  }

  pub fn get_value(&self) -> &str {
    self.0.as_str()
  }
}

impl Default for Color {
  fn default() -> Color {
    Color::from_rgb(0, 0, 0)
  }
}
