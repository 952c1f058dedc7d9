//! Markup ports — the collaborators that turn content into output text.

use hostbook_domain::error::HostbookError;
use hostbook_domain::machine::Machine;
use hostbook_domain::text::RichText;

/// Shared page chrome emitted around every page.
pub trait PageChrome {
    /// Opening markup for a page with the given title.
    fn render_header(&self, title: &str) -> Result<String, HostbookError>;

    /// Closing markup.
    fn render_footer(&self) -> Result<String, HostbookError>;
}

/// Markup for individual content blocks.
pub trait BlockRenderer {
    /// A prose paragraph.
    fn render_prose(&self, text: &RichText) -> Result<String, HostbookError>;

    /// A machine section: heading, then hardware, aliases, notes and contact.
    fn render_machine(&self, machine: &Machine) -> Result<String, HostbookError>;
}
