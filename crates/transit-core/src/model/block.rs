//! Grouping constructs (`alt`, `loop`, ...) and their partitions.

use crate::{
    geometry::{Bounds, Size},
    model::{BlockId, ElementId},
};

/// A node inside a partition: either a leaf element or a nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Child {
    Element(ElementId),
    Block(BlockId),
}

/// One labeled branch of a block, e.g. the `else` arm of an `alt`.
#[derive(Debug, Clone)]
pub struct Partition {
    text: String,
    children: Vec<Child>,
    label_size: Size,
    bounds: Bounds,
}

impl Partition {
    pub(crate) fn new(text: String) -> Self {
        Self {
            text,
            children: Vec::new(),
            label_size: Size::default(),
            bounds: Bounds::default(),
        }
    }

    /// Returns the partition label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the children in emission order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: Child) {
        self.children.push(child);
    }

    /// Returns the size of the label box, including margin and padding.
    pub fn label_size(&self) -> Size {
        self.label_size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_label_size(&mut self, size: Size) {
        self.label_size = size;
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

/// A framed region grouping consecutive statements into partitions.
///
/// A block always has at least one partition. `depth` starts at 1 and is
/// overwritten with `child.depth + 1` each time a nested block closes, so
/// it reflects the nesting below the most recently closed child.
#[derive(Debug, Clone)]
pub struct Block {
    title: Option<String>,
    partitions: Vec<Partition>,
    depth: u32,
    bounds: Bounds,
    title_box: Option<Bounds>,
}

impl Block {
    pub(crate) fn new(name: String, title: Option<String>) -> Self {
        Self {
            title,
            partitions: vec![Partition::new(name)],
            depth: 1,
            bounds: Bounds::default(),
            title_box: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Returns the partitions for geometry updates.
    pub fn partitions_mut(&mut self) -> &mut [Partition] {
        &mut self.partitions
    }

    pub(crate) fn push_partition(&mut self, name: String) {
        self.partitions.push(Partition::new(name));
    }

    /// Returns the last partition, which receives new children.
    pub(crate) fn current_partition_mut(&mut self) -> &mut Partition {
        let last = self.partitions.len() - 1;
        &mut self.partitions[last]
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub(crate) fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Returns the frame computed by layout.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the title tab computed by layout, if the block has a title.
    pub fn title_box(&self) -> Option<Bounds> {
        self.title_box
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_title_box(&mut self, title_box: Option<Bounds>) {
        self.title_box = title_box;
    }
}
