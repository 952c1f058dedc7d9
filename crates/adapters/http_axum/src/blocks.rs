//! HTML markup for prose paragraphs and machine sections.

use askama::Template;

use hostbook_app::ports::BlockRenderer;
use hostbook_domain::error::HostbookError;
use hostbook_domain::machine::Machine;
use hostbook_domain::text::{Inline, RichText};

use crate::error::{render, render_block};

#[derive(Template)]
#[template(path = "rich_text.html")]
struct RichTextTemplate<'a> {
    parts: &'a [Inline],
}

#[derive(Template)]
#[template(path = "prose.html")]
struct ProseTemplate {
    text: String,
}

#[derive(Template)]
#[template(path = "machine.html")]
struct MachineTemplate<'a> {
    anchor: &'a str,
    heading: String,
    hardware: String,
    aliases: String,
    notes: Vec<String>,
    contact: Option<String>,
}

/// Escaped HTML for a rich text fragment list.
fn rich_text(text: &RichText) -> Result<String, HostbookError> {
    render(&RichTextTemplate {
        parts: text.parts(),
    })
}

/// Renders blocks as HTML paragraphs and `<section>`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBlockRenderer;

impl BlockRenderer for HtmlBlockRenderer {
    fn render_prose(&self, text: &RichText) -> Result<String, HostbookError> {
        render_block(&ProseTemplate {
            text: rich_text(text)?,
        })
    }

    fn render_machine(&self, machine: &Machine) -> Result<String, HostbookError> {
        let notes = machine
            .notes
            .iter()
            .map(rich_text)
            .collect::<Result<Vec<_>, _>>()?;
        let contact = machine.contact.as_ref().map(rich_text).transpose()?;

        render_block(&MachineTemplate {
            anchor: &machine.hostname,
            heading: machine.heading(),
            hardware: rich_text(&machine.hardware)?,
            aliases: machine.aliases_label(),
            notes,
            contact,
        })
    }
}
