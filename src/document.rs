use super::*;

pub(crate) struct Document<'a> {
  document: &'a mut dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn body_html(&self) -> String {
    self.document.select("body").inner_html().to_string()
  }

  pub(crate) fn element_count(&self) -> usize {
    self
      .document
      .root()
      .descendants()
      .into_iter()
      .filter(NodeRef::is_element)
      .count()
  }

  pub(crate) fn new(document: &'a mut dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn new_element(&self, name: &str) -> NodeRef<'_> {
    self.document.tree.new_element(name)
  }

  pub(crate) fn remove_elements(&mut self, selector: &str) -> usize {
    let selection = self.document.select(selector);

    let removed = selection.length();

    selection.remove();

    removed
  }

  pub(crate) fn select(&self, selector: &str) -> Selection<'_> {
    self.document.select(selector)
  }
}
