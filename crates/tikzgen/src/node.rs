//! Point entities ("nodes") placed at absolute coordinates.
//!
//! A [`Node`] is a positioned, optionally labeled drawing primitive. Nodes
//! are declared with builder-style `with_*` methods and handed to
//! [`TikzFigure::add_node`](crate::TikzFigure::add_node), which returns a
//! copyable [`NodeId`] handle. Once added, a node is immutable.
//!
//! Labels identify nodes for path construction. A node added without a
//! label gets an auto-generated one (`node0`, `node1`, …) from the owning
//! figure's counter.

use crate::options::{Options, Value};

/// Opaque handle to a node stored in a [`TikzFigure`](crate::TikzFigure).
///
/// Handles are only meaningful for the figure that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A point entity: position, label, display content, layer, and style options.
///
/// # Example
///
/// ```
/// use tikzgen::Node;
///
/// let node = Node::new(1.0, 2.5)
///     .with_label("A")
///     .with_content("start")
///     .with_layer(1)
///     .with_option("fill", "blue!20");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    x: f64,
    y: f64,
    label: Option<String>,
    content: String,
    layer: i32,
    options: Options,
}

impl Node {
    /// Creates a node at `(x, y)` with no label, empty content, layer 0,
    /// and no style options.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: None,
            content: String::new(),
            layer: 0,
            options: Options::new(),
        }
    }

    /// Sets the node's label, used by paths to reference it.
    ///
    /// Labels must be unique within a figure; the figure rejects duplicates
    /// at [`add_node`](crate::TikzFigure::add_node) time.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the text rendered inside the node. Empty by default.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the rendering layer. Lower layers render first (painter's
    /// algorithm). Defaults to 0.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Adds one style option, e.g. `("shape", "circle")`.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Replaces the whole option bag.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The label, if one was set (always set after the node is added to a
    /// figure).
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Display content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rendering layer.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Style options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn assign_label(&mut self, label: String) {
        self.label = Some(label);
    }

    /// Serializes this node as a TikZ `\node` statement.
    pub(crate) fn to_tikz(&self) -> String {
        let options = if self.options.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.options.to_tikz())
        };
        // Label is always present once the node is owned by a figure.
        let label = self.label.as_deref().unwrap_or_default();
        format!(
            "    \\node{options} ({label}) at ({}, {}) {{{}}};\n",
            self.x, self.y, self.content
        )
    }
}
