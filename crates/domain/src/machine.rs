//! Machine — a physical host and its operational metadata.

use serde::{Deserialize, Serialize};

use crate::error::{HostbookError, ValidationError};
use crate::text::RichText;

/// Label rendered in place of an empty alias list.
pub const NO_ALIASES: &str = "none";

/// A physical host listed in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Machine {
    /// Canonical hostname, e.g. `pb1.php.net`.
    pub hostname: String,
    /// Network address as written by the author (usually an IPv4 address).
    pub address: String,
    /// Hardware and operating system description.
    pub hardware: RichText,
    /// DNS or service names the machine also answers to.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Operational notes, one entry per rendered line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<RichText>,
    /// Who to reach when the machine misbehaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<RichText>,
}

impl Machine {
    /// Create a builder for constructing a [`Machine`].
    #[must_use]
    pub fn builder() -> MachineBuilder {
        MachineBuilder::default()
    }

    /// Heading text: `hostname (address)`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} ({})", self.hostname, self.address)
    }

    /// Comma-separated aliases, or [`NO_ALIASES`] when there are none.
    #[must_use]
    pub fn aliases_label(&self) -> String {
        if self.aliases.is_empty() {
            NO_ALIASES.to_string()
        } else {
            self.aliases.join(", ")
        }
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::Validation`] when the hostname, the address
    /// or any alias is empty.
    pub fn validate(&self) -> Result<(), HostbookError> {
        if self.hostname.trim().is_empty() {
            return Err(ValidationError::EmptyHostname.into());
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress {
                hostname: self.hostname.clone(),
            }
            .into());
        }
        if self.aliases.iter().any(|alias| alias.trim().is_empty()) {
            return Err(ValidationError::EmptyAlias {
                hostname: self.hostname.clone(),
            }
            .into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Machine`].
#[derive(Debug, Default)]
pub struct MachineBuilder {
    hostname: Option<String>,
    address: Option<String>,
    hardware: RichText,
    aliases: Vec<String>,
    notes: Vec<RichText>,
    contact: Option<RichText>,
}

impl MachineBuilder {
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn hardware(mut self, hardware: impl Into<RichText>) -> Self {
        self.hardware = hardware.into();
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn aliases<I, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Append one line of notes.
    #[must_use]
    pub fn note(mut self, line: impl Into<RichText>) -> Self {
        self.notes.push(line.into());
        self
    }

    #[must_use]
    pub fn contact(mut self, contact: impl Into<RichText>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Consume the builder, validate, and return a [`Machine`].
    ///
    /// # Errors
    ///
    /// Returns [`HostbookError::Validation`] if the hostname or address is
    /// missing or empty, or if an alias is empty.
    pub fn build(self) -> Result<Machine, HostbookError> {
        let machine = Machine {
            hostname: self.hostname.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            hardware: self.hardware,
            aliases: self.aliases,
            notes: self.notes,
            contact: self.contact,
        };
        machine.validate()?;
        Ok(machine)
    }
}
