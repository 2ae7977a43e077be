use super::*;

use crate::engine::renderer::RenderRequest;
use crate::foundation::error::HintError;
use crate::layout::model::{Block, LayoutRegistry};

struct FixedRenderer(&'static str);

impl TemplateRenderer for FixedRenderer {
    fn render(
        &self,
        _block: &dyn BlockHandle,
        _template_file: &str,
        _dictionary: &TemplateVars,
    ) -> HintResult<String> {
        Ok(self.0.to_string())
    }
}

struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(
        &self,
        _block: &dyn BlockHandle,
        _template_file: &str,
        _dictionary: &TemplateVars,
    ) -> HintResult<String> {
        Err(HintError::render("template exploded"))
    }
}

#[test]
fn disabled_block_hints_still_emit_template_hint() {
    let renderer = HintRenderer::new(Box::new(FixedRenderer("<p>hi</p>")), false);
    let block = Block::new("content", "page::Template");
    let out = renderer
        .render(&block, "page.phtml", &TemplateVars::new())
        .unwrap();

    assert!(out.contains("debugging-hint-template-file"));
    assert!(out.contains("page.phtml"));
    assert!(!out.contains("debugging-hint-block-class"));
}

#[test]
fn original_markup_survives_verbatim() {
    let renderer = HintRenderer::new(Box::new(FixedRenderer("<ul><li>a</li></ul>")), true);
    let block = Block::new("list", "page::List");
    let out = renderer
        .render(&block, "list.phtml", &TemplateVars::new())
        .unwrap();
    assert!(out.contains("<ul><li>a</li></ul>"));
}

#[test]
fn end_to_end_root_block_with_hints() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let renderer = HintRenderer::new(Box::new(FixedRenderer("<p>hi</p>")), true);
    let block = Block::new("content", "page::Template");
    let out = renderer
        .render(&block, "page.phtml", &TemplateVars::new())
        .unwrap();

    assert!(out.contains("page.phtml"));
    assert!(out.contains(r#"layout-name-path="content""#));
    assert!(out.contains("<p>hi</p>"));
}

#[test]
fn registry_block_hint_shows_bracketed_ancestor() {
    let mut layout = LayoutRegistry::new();
    layout.insert(Block::new("menu", "page::Menu"));
    layout.declare_parent("menu", "menu.container");

    let renderer = HintRenderer::new(Box::new(FixedRenderer("<nav/>")), true);
    let handle = layout.handle("menu").unwrap();
    let out = renderer
        .render(&handle, "menu.phtml", &TemplateVars::new())
        .unwrap();
    assert!(out.contains(r#"layout-name-path="[menu.container] / menu""#));
}

#[test]
fn delegate_failure_propagates_unchanged() {
    let renderer = HintRenderer::new(Box::new(FailingRenderer), true);
    let block = Block::new("content", "page::Template");
    let err = renderer
        .render(&block, "page.phtml", &TemplateVars::new())
        .unwrap_err();

    assert!(matches!(err, HintError::Render(_)));
    assert_eq!(err.to_string(), "render error: template exploded");
}

#[test]
fn render_request_matches_direct_invocation() {
    let renderer = HintRenderer::new(Box::new(FixedRenderer("<p>hi</p>")), true);
    let block = Block::new("content", "page::Template");
    let vars = TemplateVars::new();
    let request = RenderRequest {
        block: &block,
        template_file: "page.phtml",
        dictionary: &vars,
    };

    let via_request = request.render_with(&renderer).unwrap();
    let direct = renderer.render(&block, "page.phtml", &vars).unwrap();
    assert_eq!(via_request, direct);
}
