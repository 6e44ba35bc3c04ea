use crate::foundation::error::{FolioError, FolioResult};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact decimal for attribute values: at most two fractional digits, no
/// trailing zeros. Non-finite input writes `0`.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// Streaming HTML builder that tracks open elements.
///
/// Attribute values and text go through [`escape`]; only [`HtmlWriter::raw`]
/// bypasses it. [`HtmlWriter::finish`] fails if any element is left open or
/// a close had nothing to match.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    open: Vec<&'static str>,
    unbalanced: bool,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)], empty: bool) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(value));
            self.out.push('"');
        }
        self.out.push_str(if empty { "/>" } else { ">" });
    }

    pub fn open(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, false);
        self.open.push(tag);
        self
    }

    /// Close the innermost open element.
    pub fn close(&mut self) -> &mut Self {
        match self.open.pop() {
            Some(tag) => {
                self.out.push_str("</");
                self.out.push_str(tag);
                self.out.push('>');
            }
            None => self.unbalanced = true,
        }
        self
    }

    /// Self-closed element. Covers HTML void elements and childless SVG
    /// nodes alike, so the output also parses as XML.
    pub fn void(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs, true);
        self
    }

    /// Element with an explicit closing tag and no content. HTML parsers
    /// ignore `/>` on non-void elements, so `div`/`span` placeholders use this.
    pub fn empty(&mut self, tag: &'static str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs).close()
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&escape(text));
        self
    }

    /// Append pre-built markup unchanged.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.out.push_str(markup);
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &'static str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close()
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn finish(self) -> FolioResult<String> {
        if self.unbalanced {
            return Err(FolioError::validation("html: close without a matching open"));
        }
        if let Some(tag) = self.open.last() {
            return Err(FolioError::validation(format!(
                "html: {} element(s) left open, innermost <{tag}>",
                self.open.len()
            )));
        }
        Ok(self.out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
