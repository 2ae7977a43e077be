use std::collections::BTreeMap;
use std::sync::Arc;

/// Capability exposed by host blocks participating in hint rendering.
///
/// A host block always has a name and a display type name. It may additionally
/// expose either direct parent references or its owning layout registry; the
/// resolver picks its ancestry strategy from whichever capability is present.
pub trait BlockHandle {
    /// Block name, unique within its owning layout.
    fn name(&self) -> &str;

    /// Concrete type name of the block, used for display only.
    fn runtime_type(&self) -> &str;

    /// Direct parent block, if the host exposes parent references.
    fn parent(&self) -> Option<&dyn BlockHandle> {
        None
    }

    /// Owning layout registry, if the host exposes name-based lookup.
    fn layout(&self) -> Option<&dyn LayoutHandle> {
        None
    }
}

/// Capability exposed by a host layout registry.
///
/// A name may be *declared* (it appears as somebody's parent) without being
/// *materialized* (no live block instance is registered under it), e.g. a
/// container that exists only in layout XML.
pub trait LayoutHandle {
    /// Declared parent name of `name`, or `None` at the root.
    fn parent_name_of(&self, name: &str) -> Option<&str>;

    /// Live block instance registered under `name`, if any.
    fn block_by_name(&self, name: &str) -> Option<&dyn BlockHandle>;
}

/// In-memory block node, usable standalone or through a [`LayoutRegistry`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Block {
    name: String,
    runtime_type: String,
    #[serde(skip)]
    parent: Option<Arc<Block>>,
}

impl Block {
    /// Root block with no parent.
    pub fn new(name: impl Into<String>, runtime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_type: runtime_type.into(),
            parent: None,
        }
    }

    /// Block holding a direct reference to its parent.
    pub fn with_parent(
        name: impl Into<String>,
        runtime_type: impl Into<String>,
        parent: Arc<Block>,
    ) -> Self {
        Self {
            name: name.into(),
            runtime_type: runtime_type.into(),
            parent: Some(parent),
        }
    }
}

impl BlockHandle for Block {
    fn name(&self) -> &str {
        &self.name
    }

    fn runtime_type(&self) -> &str {
        &self.runtime_type
    }

    fn parent(&self) -> Option<&dyn BlockHandle> {
        self.parent.as_deref().map(|b| b as &dyn BlockHandle)
    }
}

/// In-memory layout registry: live block instances plus declared parent names.
///
/// Read-only from the decorator's perspective; the mutators exist for hosts
/// and tests that assemble a layout by hand.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LayoutRegistry {
    blocks: BTreeMap<String, Block>,
    parents: BTreeMap<String, String>,
}

impl LayoutRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a live block instance under its own name.
    pub fn insert(&mut self, block: Block) {
        self.blocks.insert(block.name.clone(), block);
    }

    /// Declare that `child` sits under `parent` in the layout structure.
    ///
    /// Neither name needs a registered instance; declaring is independent of
    /// materializing.
    pub fn declare_parent(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        self.parents.insert(child.into(), parent.into());
    }

    /// Borrowed view of the block registered under `name`, carrying this
    /// registry as its layout capability.
    pub fn handle(&self, name: &str) -> Option<RegistryBlock<'_>> {
        self.blocks.get(name).map(|block| RegistryBlock {
            block,
            layout: self,
        })
    }
}

impl LayoutHandle for LayoutRegistry {
    fn parent_name_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    fn block_by_name(&self, name: &str) -> Option<&dyn BlockHandle> {
        self.blocks.get(name).map(|b| b as &dyn BlockHandle)
    }
}

/// A registered block paired with its owning [`LayoutRegistry`].
///
/// This is the handle hosts pass to the renderer when ancestry is resolved by
/// name lookup rather than by direct parent references.
#[derive(Clone, Copy, Debug)]
pub struct RegistryBlock<'a> {
    block: &'a Block,
    layout: &'a LayoutRegistry,
}

impl BlockHandle for RegistryBlock<'_> {
    fn name(&self) -> &str {
        self.block.name()
    }

    fn runtime_type(&self) -> &str {
        self.block.runtime_type()
    }

    fn layout(&self) -> Option<&dyn LayoutHandle> {
        Some(self.layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
