use chat_widget::services::markdown::{CmarkRenderer, MarkdownRenderer, RawHtml};

#[test]
fn test_consecutive_lines_stay_separate() {
    let html = CmarkRenderer::trusted().render("line1\nline2");
    assert_eq!(html, "<p>line1<br />\nline2</p>\n");
}

#[test]
fn test_paragraphs_and_lists() {
    let html = CmarkRenderer::trusted().render("intro\n\n- uno\n- dos");
    assert!(html.starts_with("<p>intro</p>\n"));
    assert!(html.contains("<li>uno</li>"));
    assert!(html.contains("<li>dos</li>"));
}

#[test]
fn test_trusted_renderer_passes_raw_html() {
    let renderer = CmarkRenderer::trusted();
    assert_eq!(renderer.raw_html(), RawHtml::PassThrough);
    let html = renderer.render("hola <b>mundo</b>");
    assert!(html.contains("<b>mundo</b>"));
}

#[test]
fn test_escaping_renderer_neutralizes_raw_html() {
    let renderer = CmarkRenderer::escaping();

    let inline = renderer.render("hola <b>mundo</b>");
    assert!(inline.contains("&lt;b&gt;mundo&lt;/b&gt;"));
    assert!(!inline.contains("<b>"));

    let block = renderer.render("<script>alert(1)</script>");
    assert!(!block.contains("<script>"));
    assert!(block.contains("&lt;script&gt;"));

    // markdown itself still renders
    assert_eq!(renderer.render("*si*"), "<p><em>si</em></p>\n");
}

#[test]
fn test_escaping_renderer_drops_script_links() {
    let renderer = CmarkRenderer::escaping();

    let html = renderer.render("[clic](javascript:alert(1)) y ![img](data:image/svg+xml,x)");
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("data:"));
    assert!(html.contains("<a href=\"#\">clic</a>"));

    let safe = renderer.render("[Indava](https://indava.com)");
    assert!(safe.contains("<a href=\"https://indava.com\">Indava</a>"));

    // trusted mode keeps links as written
    let trusted = CmarkRenderer::trusted().render("[clic](javascript:alert(1))");
    assert!(trusted.contains("href=\"javascript:"));
}
