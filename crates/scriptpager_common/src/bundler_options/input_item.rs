use std::borrow::Cow;

/// One user-supplied file reference: a path or a reserved alias token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputItem {
  pub import: String,
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { import: value.to_string() }
  }
}

impl From<String> for InputItem {
  fn from(value: String) -> Self {
    Self { import: value }
  }
}

impl From<Cow<'_, str>> for InputItem {
  fn from(value: Cow<'_, str>) -> Self {
    Self { import: value.into_owned() }
  }
}
