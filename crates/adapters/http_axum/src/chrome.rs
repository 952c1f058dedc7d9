//! Shared HTML header and footer.

use askama::Template;

use hostbook_app::ports::PageChrome;
use hostbook_domain::error::HostbookError;

use crate::config::{NavLink, SiteConfig};
use crate::error::render_block;

#[derive(Template)]
#[template(path = "header.html")]
struct HeaderTemplate<'a> {
    site_name: &'a str,
    title: &'a str,
    stylesheet: Option<&'a str>,
    nav: &'a [NavLink],
}

#[derive(Template)]
#[template(path = "footer.html")]
struct FooterTemplate<'a> {
    site_name: &'a str,
    footer_note: Option<&'a str>,
}

/// HTML page chrome: document head, site header with navigation, footer.
///
/// The header leaves `<main>` open; the footer closes it.
#[derive(Debug, Clone, Default)]
pub struct SiteChrome {
    site: SiteConfig,
}

impl SiteChrome {
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }
}

impl PageChrome for SiteChrome {
    fn render_header(&self, title: &str) -> Result<String, HostbookError> {
        let template = HeaderTemplate {
            site_name: &self.site.name,
            title,
            stylesheet: self.site.stylesheet.as_deref(),
            nav: &self.site.nav,
        };
        render_block(&template)
    }

    fn render_footer(&self) -> Result<String, HostbookError> {
        let template = FooterTemplate {
            site_name: &self.site.name,
            footer_note: self.site.footer_note.as_deref(),
        };
        render_block(&template)
    }
}
