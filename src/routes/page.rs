// src/routes/page.rs
use serde::Serialize;
use tera::{Context, Tera};

use crate::{copy::WidgetCopy, message::RenderedTurn};

pub const PAGE_TEMPLATE: &str = "index.html";

/// Loads the page templates. Autoescape is on, so only values passed
/// through `| safe` (the rendered turns) reach the page unescaped.
pub fn page_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/index.html"))?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}

/// Everything the widget page shows.
#[derive(Serialize)]
pub struct PageView<'a> {
    lang: &'a str,
    title: &'a str,
    subtitle: &'a str,
    placeholder: &'a str,
    send_label: &'a str,
    sending_label: &'a str,
    turns: &'a [RenderedTurn],
    input: &'a str,
    in_flight: bool,
    site_url: Option<&'a str>,
}

impl<'a> PageView<'a> {
    pub fn new(
        copy: &'a WidgetCopy,
        turns: &'a [RenderedTurn],
        input: &'a str,
        in_flight: bool,
        site_url: Option<&'a str>,
    ) -> Self {
        Self {
            lang: copy.language.code(),
            title: &copy.title,
            subtitle: &copy.subtitle,
            placeholder: &copy.placeholder,
            send_label: &copy.send_label,
            sending_label: &copy.sending_label,
            turns,
            input,
            in_flight,
            site_url,
        }
    }
}

pub fn render_page(tera: &Tera, view: &PageView<'_>) -> Result<String, tera::Error> {
    let context = Context::from_serialize(view)?;
    tera.render(PAGE_TEMPLATE, &context)
}
