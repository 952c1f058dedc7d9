//! Page — a titled, ordered sequence of content blocks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{HostbookError, ValidationError};
use crate::machine::Machine;
use crate::text::RichText;

/// One unit of page content. Blocks render in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", from = "BlockDocument")]
pub enum Block {
    /// A paragraph of prose.
    Prose { text: RichText },
    /// A machine record section.
    Machine(Machine),
}

/// Authored form of a [`Block`]. Machine fields sit inline next to the
/// `type` tag, and misspelled keys are rejected instead of dropped.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
enum BlockDocument {
    Prose {
        text: RichText,
    },
    Machine {
        hostname: String,
        address: String,
        hardware: RichText,
        #[serde(default)]
        aliases: Vec<String>,
        #[serde(default)]
        notes: Vec<RichText>,
        #[serde(default)]
        contact: Option<RichText>,
    },
}

impl From<BlockDocument> for Block {
    fn from(doc: BlockDocument) -> Self {
        match doc {
            BlockDocument::Prose { text } => Self::Prose { text },
            BlockDocument::Machine {
                hostname,
                address,
                hardware,
                aliases,
                notes,
                contact,
            } => Self::Machine(Machine {
                hostname,
                address,
                hardware,
                aliases,
                notes,
                contact,
            }),
        }
    }
}

impl Block {
    #[must_use]
    pub fn prose(text: impl Into<RichText>) -> Self {
        Self::Prose { text: text.into() }
    }
}

/// A complete inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a builder for constructing a [`Page`].
    #[must_use]
    pub fn builder() -> PageBuilder {
        PageBuilder::default()
    }

    /// Iterate over machine records in page order.
    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Machine(machine) => Some(machine),
            Block::Prose { .. } => None,
        })
    }

    #[must_use]
    pub fn machine_count(&self) -> usize {
        self.machines().count()
    }

    /// Find a machine by its canonical hostname (ASCII case-insensitive).
    #[must_use]
    pub fn find_machine(&self, hostname: &str) -> Option<&Machine> {
        self.machines()
            .find(|machine| machine.hostname.eq_ignore_ascii_case(hostname))
    }

    /// Check domain invariants for the page and every machine on it.
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::Validation`] when the title is empty, a
    /// machine is invalid, or two machines share a hostname.
    pub fn validate(&self) -> Result<(), HostbookError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let mut seen = HashSet::new();
        for machine in self.machines() {
            machine.validate()?;
            if !seen.insert(machine.hostname.to_ascii_lowercase()) {
                return Err(ValidationError::DuplicateHostname(machine.hostname.clone()).into());
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Page`].
#[derive(Debug, Default)]
pub struct PageBuilder {
    title: Option<String>,
    blocks: Vec<Block>,
}

impl PageBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a prose paragraph.
    #[must_use]
    pub fn prose(mut self, text: impl Into<RichText>) -> Self {
        self.blocks.push(Block::prose(text));
        self
    }

    /// Append a machine section.
    #[must_use]
    pub fn machine(mut self, machine: Machine) -> Self {
        self.blocks.push(Block::Machine(machine));
        self
    }

    /// Consume the builder, validate, and return a [`Page`].
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::Validation`] if any invariant checked by
    /// [`Page::validate`] fails.
    pub fn build(self) -> Result<Page, HostbookError> {
        let page = Page {
            title: self.title.unwrap_or_default(),
            blocks: self.blocks,
        };
        page.validate()?;
        Ok(page)
    }
}
