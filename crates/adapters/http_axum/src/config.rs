//! Site chrome configuration.

use serde::Deserialize;

/// A navigation entry in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Settings for the shared header and footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in the header and the document title.
    pub name: String,
    /// External stylesheet URL. The built-in style is inlined when unset.
    pub stylesheet: Option<String>,
    /// Header navigation links.
    pub nav: Vec<NavLink>,
    /// Extra line printed in the footer.
    pub footer_note: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "php.net".to_string(),
            stylesheet: None,
            nav: vec![
                NavLink {
                    label: "inventory".to_string(),
                    href: "/".to_string(),
                },
                NavLink {
                    label: "json".to_string(),
                    href: "/api/machines".to_string(),
                },
            ],
            footer_note: None,
        }
    }
}
