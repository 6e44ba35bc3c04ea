use super::*;

#[test]
fn escape_covers_markup_and_quotes() {
    assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn num_is_compact() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(1440.0), "1440");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(1.234), "1.23");
    assert_eq!(num(-12.5), "-12.5");
    assert_eq!(num(-0.001), "0");
    assert_eq!(num(f64::NAN), "0");
    assert_eq!(num(f64::INFINITY), "0");
}

#[test]
fn writer_nests_and_escapes() {
    let mut w = HtmlWriter::new();
    w.open("div", &[("class", "a\"b")])
        .element("p", &[], "1 < 2")
        .void("img", &[("alt", "x&y")])
        .empty("span", &[("class", "dot")]);
    assert_eq!(w.depth(), 1);
    w.close();
    assert_eq!(
        w.finish().unwrap(),
        r#"<div class="a&quot;b"><p>1 &lt; 2</p><img alt="x&amp;y"/><span class="dot"></span></div>"#
    );
}

#[test]
fn raw_is_untouched() {
    let mut w = HtmlWriter::new();
    w.raw("<svg/>").text("&");
    assert_eq!(w.finish().unwrap(), "<svg/>&amp;");
}

#[test]
fn unclosed_elements_fail() {
    let mut w = HtmlWriter::new();
    w.open("main", &[]).open("section", &[]);
    let err = w.finish().unwrap_err();
    assert!(err.to_string().contains("<section>"), "{err}");
}

#[test]
fn stray_close_fails() {
    let mut w = HtmlWriter::new();
    w.open("p", &[]).close().close();
    assert!(w.finish().is_err());
}
