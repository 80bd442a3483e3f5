use super::source::Source;

/// Concatenates sources, separated by `separator` (a newline unless told otherwise).
pub struct SourceJoiner<'source> {
  inner: Vec<Box<dyn Source + Send + 'source>>,
  separator: &'static str,
}

impl Default for SourceJoiner<'_> {
  fn default() -> Self {
    Self::with_separator("\n")
  }
}

impl<'source> SourceJoiner<'source> {
  pub fn with_separator(separator: &'static str) -> Self {
    Self { inner: Vec::new(), separator }
  }

  pub fn append_source<T: Source + Send + 'source>(&mut self, source: T) {
    self.inner.push(Box::new(source));
  }

  pub fn lines_count(&self) -> usize {
    let separators = self.inner.len().saturating_sub(1);
    self.inner.iter().map(|source| source.lines_count()).sum::<usize>()
      + separators * super::source::lines_count(self.separator)
  }

  pub fn join(&self) -> String {
    let sources_len = self.inner.len();
    if sources_len == 0 {
      return String::new();
    }
    let sources_iter = self.inner.iter().enumerate();

    let size_hint_of_ret_source = sources_iter.clone().map(|(_idx, source)| source.content().len()).sum::<usize>()
        + /* Each source we will emit a separator but exclude last one */ self.separator.len() * (sources_len - 1);
    let mut ret_source = String::with_capacity(size_hint_of_ret_source);

    for (index, source) in sources_iter {
      ret_source.push_str(source.content());
      if index < sources_len - 1 {
        ret_source.push_str(self.separator);
      }
    }

    ret_source
  }
}

#[test]
fn test_join() {
  let mut joiner = SourceJoiner::default();
  assert_eq!(joiner.join(), "");
  joiner.append_source("a");
  joiner.append_source("b");
  joiner.append_source(String::from("c"));
  assert_eq!(joiner.join(), "a\nb\nc");
  assert_eq!(joiner.lines_count(), 2);

  let mut joiner = SourceJoiner::with_separator("");
  joiner.append_source("<script>");
  joiner.append_source("</script>");
  assert_eq!(joiner.join(), "<script></script>");
}
