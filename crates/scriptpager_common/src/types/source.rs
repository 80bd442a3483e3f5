use memchr::memmem;

#[inline]
pub fn lines_count(str: &str) -> usize {
  memmem::find_iter(str.as_bytes(), "\n").count()
}

#[test]
fn test_lines_count() {
  assert_eq!(lines_count("a\nb\nc"), 2);
  assert_eq!(lines_count("a\nb\nc\n"), 3);
  assert_eq!(lines_count("a"), 0);
}

pub trait Source {
  fn content(&self) -> &str;

  fn lines_count(&self) -> usize {
    lines_count(self.content())
  }
}

impl Source for &str {
  fn content(&self) -> &str {
    self
  }
}

impl Source for String {
  fn content(&self) -> &str {
    self
  }
}

impl Source for arcstr::ArcStr {
  fn content(&self) -> &str {
    self
  }
}
