//! Pure string-templating functions for the three hint fragments.
//!
//! Inputs are trusted display strings from the host and are interpolated
//! verbatim. No HTML escaping is applied; escaping belongs to the host, and
//! these overlays are debugging aids shown to developers, not end users.

/// Fixed-position overlay naming the source template file.
///
/// The path appears both as the `title` tooltip and as visible text.
pub fn template_hint(template_file: &str) -> String {
    format!(
        r#"<div class="debugging-hint-template-file"
     style="position: absolute;
            top: 0;
            padding: 2px 5px;
            font: normal 11px Arial;
            background: red; left: 0;
            color: white;
            white-space: nowrap;"
     onmouseover="this.style.zIndex = 999;"
     onmouseout="this.style.zIndex = 'auto';"
     title="{template_file}">
{template_file}
</div>"#
    )
}

/// Fixed-position overlay naming the block's type and its ancestry path.
///
/// The type name doubles as the `title` tooltip and the path is exposed in a
/// `layout-name-path` attribute; both are also printed as visible text lines.
pub fn block_hint(runtime_type: &str, name_path: &str) -> String {
    format!(
        r#"<div
    class="debugging-hint-block-class"
    style="position: absolute;
           top: 0;
           padding: 2px 5px;
           font: normal 11px Arial;
           background: red;
           right: 0;
           color: white;
           white-space: nowrap;"
    onmouseover="this.style.zIndex = 999;"
    onmouseout="this.style.zIndex = 'auto';"
    title="{runtime_type}"
    layout-name-path="{name_path}">
    <div>class : {runtime_type}</div>
    <div>layout-name-path : {name_path}</div>
</div>"#
    )
}

/// Container wrapping the original markup with a hover-reveal hint panel.
///
/// The two hint fragments sit in a hidden `.container` child that the host
/// page's jQuery shows on mouseover and hides again on mouseout; the original
/// markup is always displayed beneath it.
pub fn wrap(template_hint: &str, block_hint: &str, original: &str) -> String {
    format!(
        r#"<div
    class="debugging-hints"
    style="position: relative;
           border: 1px dotted red;
           margin: 6px 2px;
           padding: 18px 2px 2px 2px;"
    onmouseover="jQuery(this).children('.container').show();"
    onmouseout="jQuery(this).children('.container').hide();">
<div class="container" style="display:none">
    {block_hint}
    {template_hint}
</div>
    {original}
</div>"#
    )
}

#[cfg(test)]
#[path = "../../tests/unit/markup/builder.rs"]
mod tests;
