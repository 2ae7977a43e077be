use std::collections::BTreeSet;

use crate::layout::model::{BlockHandle, LayoutHandle};

/// Resolve the ancestry path of `block`: ancestor names oldest-first, joined
/// by `" / "`, ending with the block's own name.
///
/// A root block resolves to just its own name, with no separator. If the block
/// exposes a layout registry the path is resolved by name lookup, and ancestors
/// that are declared in the layout but have no registered instance appear
/// bracketed, e.g. `"[header.container]"`. Otherwise direct parent references
/// are followed; an absent parent terminates the walk and is never an ancestor.
pub fn resolve_name_path(block: &dyn BlockHandle) -> String {
    let segments = match block.layout() {
        Some(layout) => registry_segments(block.name(), layout),
        None => direct_segments(block),
    };
    segments.join(" / ")
}

fn direct_segments(block: &dyn BlockHandle) -> Vec<String> {
    let mut segments = vec![block.name().to_string()];
    let mut seen = BTreeSet::from([block.name().to_string()]);
    let mut current = block.parent();
    while let Some(parent) = current {
        // Layout graphs are acyclic by contract; the guard only stops
        // malformed host data from looping forever.
        if !seen.insert(parent.name().to_string()) {
            break;
        }
        segments.push(parent.name().to_string());
        current = parent.parent();
    }
    segments.reverse();
    segments
}

fn registry_segments(name: &str, layout: &dyn LayoutHandle) -> Vec<String> {
    let mut segments = vec![name.to_string()];
    let mut seen = BTreeSet::from([name.to_string()]);
    let mut current = name.to_string();
    while let Some(parent) = layout.parent_name_of(&current) {
        let parent = parent.to_string();
        if !seen.insert(parent.clone()) {
            break;
        }
        if layout.block_by_name(&parent).is_some() {
            segments.push(parent.clone());
        } else {
            // Declared in the layout structure but never materialized.
            segments.push(format!("[{parent}]"));
        }
        current = parent;
    }
    segments.reverse();
    segments
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolver.rs"]
mod tests;
