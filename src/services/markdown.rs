// src/services/markdown.rs
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Turns message text into HTML that the page embeds as-is. Whatever this
/// returns is trusted markup.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// Rewrites every newline as a markdown hard break so consecutive lines stay
/// on separate visual lines.
pub fn with_hard_breaks(content: &str) -> String {
    content.replace('\n', "  \n")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawHtml {
    /// Raw HTML in the message is emitted untouched.
    PassThrough,
    /// Raw HTML in the message is shown as text and script-capable link
    /// targets are replaced with `#`.
    Escape,
}

#[derive(Clone, Debug)]
pub struct CmarkRenderer {
    options: Options,
    raw_html: RawHtml,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::trusted()
    }
}

impl CmarkRenderer {
    pub fn new(raw_html: RawHtml) -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS,
            raw_html,
        }
    }

    pub fn trusted() -> Self {
        Self::new(RawHtml::PassThrough)
    }

    pub fn escaping() -> Self {
        Self::new(RawHtml::Escape)
    }

    pub fn raw_html(&self) -> RawHtml {
        self.raw_html
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let source = with_hard_breaks(markdown);
        let parser = Parser::new_ext(&source, self.options);
        let mut html_output = String::new();
        match self.raw_html {
            RawHtml::PassThrough => html::push_html(&mut html_output, parser),
            RawHtml::Escape => {
                let events = parser.map(|event| match event {
                    Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                    Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
                        Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
                    }
                    Event::Start(Tag::Image { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
                        Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed("#"), title, id })
                    }
                    other => other,
                });
                html::push_html(&mut html_output, events);
            }
        }
        html_output
    }
}

fn is_script_url(url: &str) -> bool {
    // browsers ignore whitespace and control characters inside the scheme
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(11)
        .collect::<String>()
        .to_lowercase();
    ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|bad| scheme.starts_with(bad))
}
