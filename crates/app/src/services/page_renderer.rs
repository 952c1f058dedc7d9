//! Page renderer — header, content blocks in order, footer.

use hostbook_domain::error::HostbookError;
use hostbook_domain::page::{Block, Page};

use crate::ports::{BlockRenderer, PageChrome};

/// Renders a [`Page`] by concatenating chrome and block markup.
///
/// Rendering adds no failure modes of its own: errors only come from the
/// injected collaborators.
pub struct PageRenderer<C, B> {
    chrome: C,
    blocks: B,
}

impl<C: PageChrome, B: BlockRenderer> PageRenderer<C, B> {
    /// Create a new renderer from its chrome and block collaborators.
    pub fn new(chrome: C, blocks: B) -> Self {
        Self { chrome, blocks }
    }

    /// Render the full document.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the chrome or block renderer.
    pub fn render(&self, page: &Page) -> Result<String, HostbookError> {
        tracing::debug!(
            title = %page.title,
            blocks = page.blocks.len(),
            machines = page.machine_count(),
            "rendering page"
        );

        let mut out = self.chrome.render_header(&page.title)?;
        for block in &page.blocks {
            let markup = match block {
                Block::Prose { text } => self.blocks.render_prose(text)?,
                Block::Machine(machine) => self.blocks.render_machine(machine)?,
            };
            out.push_str(&markup);
        }
        out.push_str(&self.chrome.render_footer()?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostbook_domain::catalog;
    use hostbook_domain::machine::Machine;
    use hostbook_domain::text::RichText;

    struct BracketChrome;

    impl PageChrome for BracketChrome {
        fn render_header(&self, title: &str) -> Result<String, HostbookError> {
            Ok(format!("[head:{title}]"))
        }

        fn render_footer(&self) -> Result<String, HostbookError> {
            Ok("[foot]".to_string())
        }
    }

    struct LineBlocks;

    impl BlockRenderer for LineBlocks {
        fn render_prose(&self, text: &RichText) -> Result<String, HostbookError> {
            Ok(format!("[p:{}]", text.plain_text()))
        }

        fn render_machine(&self, machine: &Machine) -> Result<String, HostbookError> {
            let mut out = format!("[h2:{}]", machine.heading());
            out.push_str(&format!("[machine:{}]", machine.hardware.plain_text()));
            out.push_str(&format!("[aliases:{}]", machine.aliases_label()));
            if machine.has_notes() {
                out.push_str("[notes]");
            }
            if machine.contact.is_some() {
                out.push_str("[contact]");
            }
            Ok(out)
        }
    }

    struct FailingChrome;

    impl PageChrome for FailingChrome {
        fn render_header(&self, _title: &str) -> Result<String, HostbookError> {
            Ok(String::new())
        }

        fn render_footer(&self) -> Result<String, HostbookError> {
            Err(HostbookError::Render("footer missing".into()))
        }
    }

    fn renderer() -> PageRenderer<BracketChrome, LineBlocks> {
        PageRenderer::new(BracketChrome, LineBlocks)
    }

    #[test]
    fn should_wrap_blocks_between_header_and_footer() {
        let page = Page::builder()
            .title("machine inventory")
            .prose("intro")
            .prose("outro")
            .build()
            .unwrap();

        let out = renderer().render(&page).unwrap();
        assert_eq!(out, "[head:machine inventory][p:intro][p:outro][foot]");
    }

    #[test]
    fn should_render_identically_on_every_call() {
        let page = catalog::php_net();
        let svc = renderer();
        assert_eq!(svc.render(&page).unwrap(), svc.render(&page).unwrap());
    }

    #[test]
    fn should_emit_one_heading_per_machine() {
        let page = catalog::php_net();
        let out = renderer().render(&page).unwrap();
        assert_eq!(out.matches("[h2:").count(), page.machine_count());
    }

    #[test]
    fn should_keep_machine_order() {
        let page = catalog::php_net();
        let out = renderer().render(&page).unwrap();
        let nex1 = out.find("[h2:nex1.php.net").unwrap();
        let pb1 = out.find("[h2:pb1.php.net").unwrap();
        let y2 = out.find("[h2:y2.php.net").unwrap();
        assert!(nex1 < pb1 && pb1 < y2);
    }

    #[test]
    fn should_render_chrome_and_prose_without_machines() {
        let page = Page::builder()
            .title("empty")
            .prose("no hosts yet")
            .build()
            .unwrap();
        let out = renderer().render(&page).unwrap();
        assert!(out.starts_with("[head:empty]"));
        assert!(out.contains("[p:no hosts yet]"));
        assert!(out.ends_with("[foot]"));
        assert!(!out.contains("[h2:"));
    }

    #[test]
    fn should_mark_empty_aliases_as_none() {
        let page = Page::builder()
            .title("t")
            .machine(
                Machine::builder()
                    .hostname("sp1.php.net")
                    .address("69.28.246.234")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let out = renderer().render(&page).unwrap();
        assert!(out.contains("[aliases:none]"));
    }

    #[test]
    fn should_propagate_collaborator_failure() {
        let svc = PageRenderer::new(FailingChrome, LineBlocks);
        let page = catalog::php_net();
        assert!(matches!(svc.render(&page), Err(HostbookError::Render(_))));
    }
}
