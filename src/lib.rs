//! Blockhints decorates a host template engine with diagnostic hint overlays.
//!
//! When a page is assembled from many nested layout blocks it is hard to tell,
//! looking at the final HTML, which template file and which block produced a
//! given fragment. [`HintRenderer`] wraps any [`TemplateRenderer`] and annotates
//! each rendered fragment with two overlay banners: the source template file,
//! and (optionally) the block's type name plus its ancestry path in the layout.
//!
//! # Pipeline overview
//!
//! 1. **Delegate**: the wrapped renderer produces the original markup.
//! 2. **Resolve**: if block hints are enabled, [`resolve_name_path`] walks the
//!    block's ancestry (direct parent references, or a layout registry lookup).
//! 3. **Build**: [`template_hint`], [`block_hint`] and the hover-reveal
//!    [`wrap`] container are assembled around the original markup.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail-transparent**: delegate failures propagate unchanged; the decorator
//!   introduces no error states of its own.
//! - **Trusted strings**: hint inputs are display text from the host and are
//!   interpolated verbatim, never escaped or rewritten.
//! - **No cross-call state**: the only per-instance state is an immutable
//!   "show block hints" flag set at construction.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod foundation;
mod layout;
mod markup;

pub use engine::hints::HintRenderer;
pub use engine::renderer::{RenderRequest, TemplateRenderer, TemplateVars};
pub use foundation::error::{HintError, HintResult};
pub use layout::model::{Block, BlockHandle, LayoutHandle, LayoutRegistry, RegistryBlock};
pub use layout::resolver::resolve_name_path;
pub use markup::builder::{block_hint, template_hint, wrap};
