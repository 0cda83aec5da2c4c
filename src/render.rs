/*!
 * HTML fragment rendering for fetched documents.
 *
 * Produces unstyled semantic markup. Every `Block` consumer here matches
 * exhaustively; `Block::Unknown` renders nothing and is logged.
 */

use log::warn;

use crate::content::configs::{ContactConfig, ContactMapConfig, IvfIcsiConfig, TreatmentsConfig};
use crate::content::{Block, PageDoc, Section};
use crate::i18n;

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn list(tag: &str, items: &[String]) -> String {
    let body: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<{tag}>{body}</{tag}>")
}

/// Render one block. Empty text and empty lists still produce their element.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { value } => format!("<p>{}</p>", escape(value)),
        Block::Heading { value } => format!("<h3>{}</h3>", escape(value)),
        Block::UnorderedList { items } => list("ul", items),
        Block::OrderedList { items } => list("ol", items),
        Block::Image { url, alt } => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape(url),
            escape(alt.as_deref().unwrap_or_default())
        ),
        Block::Unknown => {
            warn!("Skipping content block with unrecognized type");
            String::new()
        }
    }
}

/// Render a section and its blocks in sequence order
pub fn render_section(section: &Section) -> String {
    let mut out = format!("<section id=\"{}\">", escape(&section.id));
    if let Some(title) = &section.title {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    for block in &section.blocks {
        out.push_str(&render_block(block));
    }
    out.push_str("</section>");
    out
}

fn render_sections(sections: &[&Section]) -> String {
    sections.iter().map(|section| render_section(section)).collect()
}

fn head(title: &str, description: &str) -> String {
    format!(
        "<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n",
        escape(title),
        escape(description)
    )
}

fn hero(image: Option<&str>, title: &str) -> String {
    let mut out = String::from("<header>");
    if let Some(url) = image {
        out.push_str(&format!("<img class=\"hero\" src=\"{}\" alt=\"\">", escape(url)));
    }
    out.push_str(&format!("<h1>{}</h1></header>\n", escape(title)));
    out
}

/// Render a full page document: head metadata, hero, active sections in
/// order, then links to the page in other locales
pub fn render_page(page: &PageDoc) -> String {
    let mut out = head(page.head_title(), &page.meta_description);
    for alternate in page.alternates.as_deref().unwrap_or_default() {
        out.push_str(&format!(
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"/{}/{}\">\n",
            escape(&alternate.locale),
            escape(&alternate.locale),
            escape(&alternate.slug)
        ));
    }
    out.push_str(&hero(page.hero_image.as_deref(), &page.page_title));
    out.push_str("<main>");
    out.push_str(&render_sections(&page.active_sections()));
    out.push_str("</main>\n");
    out
}

/// Fallback shown when no page document could be fetched
pub fn render_not_found(locale: &str) -> String {
    format!(
        "<main class=\"not-found\"><h1>{}</h1><p>{}</p></main>\n",
        escape(i18n::lookup(locale, "page.notFound.title")),
        escape(i18n::lookup(locale, "page.notFound.body"))
    )
}

pub fn render_contact(config: &ContactConfig, locale: &str) -> String {
    let mut out = hero(None, &config.title);
    out.push_str("<main>");
    out.push_str(&format!("<p>{}</p>", escape(&config.subtitle)));
    out.push_str(&format!(
        "<dl><dt>{}</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd></dl>",
        escape(i18n::lookup(locale, "contact.phone")),
        escape(&config.phone),
        escape(i18n::lookup(locale, "contact.email")),
        escape(&config.email),
        escape(i18n::lookup(locale, "contact.address")),
        escape(&config.address)
    ));

    out.push_str("<ul class=\"channels\">");
    for channel in config.active_channels() {
        match &channel.href {
            Some(href) => out.push_str(&format!(
                "<li><a href=\"{}\">{}: {}</a></li>",
                escape(href),
                escape(&channel.label),
                escape(&channel.value)
            )),
            None => out.push_str(&format!("<li>{}: {}</li>", escape(&channel.label), escape(&channel.value))),
        }
    }
    out.push_str("</ul>");

    out.push_str(&format!("<h2>{}</h2><table>", escape(i18n::lookup(locale, "contact.workingHours"))));
    for row in &config.working_hours {
        out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>", escape(&row.days), escape(&row.hours)));
    }
    out.push_str("</table></main>\n");
    out
}

pub fn render_contact_map(config: &ContactMapConfig, locale: &str) -> String {
    let mut out = hero(None, &config.title);
    out.push_str("<main>");
    out.push_str(&format!(
        "<iframe src=\"{}\" title=\"{}\" data-lat=\"{}\" data-lng=\"{}\" data-zoom=\"{}\"></iframe>",
        escape(&config.embed_url),
        escape(&config.address),
        config.latitude,
        config.longitude,
        config.zoom
    ));
    out.push_str(&format!("<h2>{}</h2><dl>", escape(i18n::lookup(locale, "contactMap.directions"))));
    for direction in config.active_directions() {
        out.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            escape(&direction.title),
            escape(&direction.description)
        ));
    }
    out.push_str("</dl></main>\n");
    out
}

pub fn render_treatments(config: &TreatmentsConfig, locale: &str) -> String {
    let read_more = escape(i18n::lookup(locale, "treatments.readMore"));
    let mut out = hero(None, &config.title);
    out.push_str("<main>");
    out.push_str(&format!("<p>{}</p>", escape(&config.subtitle)));
    for treatment in config.active_treatments() {
        out.push_str(&format!("<article id=\"{}\">", escape(&treatment.id)));
        if let Some(image) = &treatment.image {
            out.push_str(&format!("<img src=\"{}\" alt=\"{}\">", escape(image), escape(&treatment.title)));
        }
        out.push_str(&format!(
            "<h2>{}</h2><p>{}</p><a href=\"/{}/{}\">{}</a></article>",
            escape(&treatment.title),
            escape(&treatment.summary),
            escape(locale),
            escape(&treatment.slug),
            read_more
        ));
    }
    out.push_str("</main>\n");
    out
}

pub fn render_ivf_icsi(config: &IvfIcsiConfig) -> String {
    let mut out = hero(config.hero_image.as_deref(), &config.hero_title);
    out.push_str("<main>");
    out.push_str(&format!("<p>{}</p>", escape(&config.hero_subtitle)));
    out.push_str(&render_sections(&config.active_sections()));
    out.push_str("</main>\n");
    out
}
