use crate::engine::renderer::{TemplateRenderer, TemplateVars};
use crate::foundation::error::HintResult;
use crate::layout::model::BlockHandle;
use crate::layout::resolver::resolve_name_path;
use crate::markup::builder;

/// Decorator that inserts debugging hints into rendered block contents.
///
/// Wraps another [`TemplateRenderer`], calls it exactly once per invocation
/// and returns its output inside a hover-reveal container carrying a
/// template-file banner and, when `show_block_hints` is set, a block
/// provenance banner. Delegate failures propagate unchanged.
pub struct HintRenderer {
    subject: Box<dyn TemplateRenderer>,
    show_block_hints: bool,
}

impl HintRenderer {
    /// Wrap `subject`, optionally including block provenance in the hints.
    ///
    /// `show_block_hints` is fixed for the lifetime of the decorator, so one
    /// instance can serve concurrent render calls.
    pub fn new(subject: Box<dyn TemplateRenderer>, show_block_hints: bool) -> Self {
        Self {
            subject,
            show_block_hints,
        }
    }
}

impl TemplateRenderer for HintRenderer {
    #[tracing::instrument(skip(self, block, dictionary), fields(block = block.name()))]
    fn render(
        &self,
        block: &dyn BlockHandle,
        template_file: &str,
        dictionary: &TemplateVars,
    ) -> HintResult<String> {
        let original = self.subject.render(block, template_file, dictionary)?;
        let block_hint = if self.show_block_hints {
            builder::block_hint(block.runtime_type(), &resolve_name_path(block))
        } else {
            String::new()
        };
        let template_hint = builder::template_hint(template_file);
        Ok(builder::wrap(&template_hint, &block_hint, &original))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/hints.rs"]
mod tests;
