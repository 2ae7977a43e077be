use std::collections::BTreeMap;

use crate::foundation::error::HintResult;
use crate::layout::model::BlockHandle;

/// Template variables handed through to the host renderer.
///
/// Values are opaque to this crate; they are never read, rewritten or
/// reordered on the way through.
pub type TemplateVars = BTreeMap<String, serde_json::Value>;

/// Host-side template engine seam.
///
/// The host's real engine implements this, and [`crate::HintRenderer`] wraps
/// any implementation of it (decorator by composition). `template_file` is
/// display text only; this crate never parses or opens it.
pub trait TemplateRenderer {
    /// Render `block`'s template file with the given variables.
    fn render(
        &self,
        block: &dyn BlockHandle,
        template_file: &str,
        dictionary: &TemplateVars,
    ) -> HintResult<String>;
}

/// One render invocation, immutable for its duration.
#[derive(Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Block being rendered.
    pub block: &'a dyn BlockHandle,
    /// Path of the source template file, used only as display text.
    pub template_file: &'a str,
    /// Template variables, passed through unmodified.
    pub dictionary: &'a TemplateVars,
}

impl RenderRequest<'_> {
    /// Run this request against `renderer`.
    pub fn render_with(&self, renderer: &dyn TemplateRenderer) -> HintResult<String> {
        renderer.render(self.block, self.template_file, self.dictionary)
    }
}
