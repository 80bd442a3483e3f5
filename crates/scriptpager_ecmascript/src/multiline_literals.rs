use oxc::{
  ast::ast,
  ast_visit::{Visit, walk},
  span::Span,
};

/// Collects the spans of string and template literals that contain a line break.
///
/// Text inside those spans is part of a value, so no line starting within one may be touched.
pub struct MultilineLiterals<'s> {
  source: &'s str,
  pub spans: Vec<Span>,
}

impl<'s> MultilineLiterals<'s> {
  pub fn new(source: &'s str) -> Self {
    Self { source, spans: Vec::new() }
  }

  fn record(&mut self, span: Span) {
    let text = self.source.get(span.start as usize..span.end as usize).unwrap_or_default();
    if memchr::memchr2(b'\n', b'\r', text.as_bytes()).is_some() {
      self.spans.push(span);
    }
  }

  /// Whether the byte at `offset` is inside a recorded literal, delimiters excluded.
  pub fn covers(&self, offset: usize) -> bool {
    self.spans.iter().any(|span| (span.start as usize) < offset && offset < (span.end as usize))
  }
}

impl<'a> Visit<'a> for MultilineLiterals<'_> {
  fn visit_string_literal(&mut self, it: &ast::StringLiteral<'a>) {
    self.record(it.span);
  }

  fn visit_template_literal(&mut self, it: &ast::TemplateLiteral<'a>) {
    self.record(it.span);
    walk::walk_template_literal(self, it);
  }
}
