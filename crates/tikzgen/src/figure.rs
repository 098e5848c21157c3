//! The layered diagram model and its TikZ serializer.
//!
//! [`TikzFigure`] accumulates nodes and paths, each tagged with an integer
//! layer, and renders them deterministically: layers in ascending numeric
//! order, items within a layer in insertion order. Rendering is a pure
//! function of the model; compiling the rendered markup to a PDF lives in
//! the [`compile`](crate::compile) module.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path as FsPath;

use log::{debug, info};

use crate::compile::Compiler;
use crate::error::TikzError;
use crate::node::{Node, NodeId};
use crate::path::{Path, PathId, PointRef, ResolvedPath};

/// One entry in a layer bucket: an index into the figure's node or path
/// storage. Buckets interleave both kinds in insertion order.
#[derive(Debug, Clone, Copy)]
enum Item {
    Node(usize),
    Path(usize),
}

/// A layered node/path diagram that serializes to TikZ markup.
///
/// Node labels are unique per figure: an explicit duplicate is rejected,
/// and omitted labels are auto-generated as `node0`, `node1`, … from an
/// instance-scoped counter. Paths resolve label references eagerly when
/// added, so a constructed figure always renders.
///
/// # Example
///
/// ```
/// use tikzgen::{Node, Path, TikzFigure};
///
/// let mut figure = TikzFigure::new().with_caption("A triangle");
/// figure.add_node(Node::new(0.0, 0.0).with_label("A"))?;
/// figure.add_node(Node::new(2.0, 0.0).with_label("B"))?;
/// figure.add_node(Node::new(1.0, 1.5).with_label("C"))?;
/// figure.add_path(Path::through(["A", "B", "C"]).closed())?;
///
/// let tikz = figure.render();
/// assert!(tikz.contains("\\begin{tikzpicture}"));
/// # Ok::<(), tikzgen::TikzError>(())
/// ```
#[derive(Debug, Default)]
pub struct TikzFigure {
    caption: Option<String>,
    description: Option<String>,
    label: Option<String>,
    grid: bool,

    nodes: Vec<Node>,
    paths: Vec<ResolvedPath>,

    /// Layer buckets; `BTreeMap` pins the cross-layer rendering order to
    /// ascending numeric keys.
    layers: BTreeMap<i32, Vec<Item>>,
    /// Exact-match label lookup for path resolution.
    labels: HashMap<String, NodeId>,
    /// Instance-scoped counter for auto-generated node labels.
    unnamed_counter: usize,
}

impl TikzFigure {
    /// Creates an empty figure with no metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the figure caption. Any metadata (caption, description, or
    /// cross-reference label) causes [`render`](Self::render) to wrap the
    /// scene in a `figure` environment.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the free-text description. Not emitted into the markup, but
    /// its presence triggers the `figure` envelope.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the cross-reference label emitted as `\label{…}`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Enables a background coordinate grid in the scene.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Figure caption, if set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Figure description, if set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Cross-reference label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of nodes in the figure.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of paths in the figure.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Returns the node behind a handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Adds a node to the figure.
    ///
    /// A node without a label gets `node{n}` from the figure's counter.
    /// The counter advances only for auto-generated labels and is
    /// independent of layer assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TikzError::InvalidArgument`] if the node's label collides
    /// with one already in the figure.
    pub fn add_node(&mut self, mut node: Node) -> Result<NodeId, TikzError> {
        let label = match node.label() {
            Some(label) => {
                if self.labels.contains_key(label) {
                    return Err(TikzError::InvalidArgument(format!(
                        "duplicate node label `{label}`"
                    )));
                }
                label.to_string()
            }
            None => {
                let label = format!("node{}", self.unnamed_counter);
                self.unnamed_counter += 1;
                node.assign_label(label.clone());
                label
            }
        };

        let id = NodeId(self.nodes.len());
        debug!(label, layer = node.layer(); "Adding node");

        self.labels.insert(label, id);
        self.layers
            .entry(node.layer())
            .or_default()
            .push(Item::Node(id.0));
        self.nodes.push(node);

        Ok(id)
    }

    /// Adds a path to the figure, resolving label references eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`TikzError::InvalidArgument`] if the point list is empty,
    /// if a label does not match any node added so far, or if a [`NodeId`]
    /// was issued by a different figure.
    pub fn add_path(&mut self, path: Path) -> Result<PathId, TikzError> {
        let (points, actions, cycle, layer, options) = path.into_parts();

        if points.is_empty() {
            return Err(TikzError::InvalidArgument(
                "path must reference at least one node".to_string(),
            ));
        }

        let nodes = points
            .into_iter()
            .map(|point| self.resolve(point))
            .collect::<Result<Vec<_>, _>>()?;

        let id = PathId(self.paths.len());
        debug!(points = nodes.len(), layer; "Adding path");

        self.layers.entry(layer).or_default().push(Item::Path(id.0));
        self.paths.push(ResolvedPath {
            nodes,
            actions,
            cycle,
            layer,
            options,
        });

        Ok(id)
    }

    fn resolve(&self, point: PointRef) -> Result<NodeId, TikzError> {
        match point {
            PointRef::Id(id) => {
                if id.0 >= self.nodes.len() {
                    return Err(TikzError::InvalidArgument(format!(
                        "node handle {} does not belong to this figure",
                        id.0
                    )));
                }
                Ok(id)
            }
            PointRef::Label(label) => self.labels.get(&label).copied().ok_or_else(|| {
                TikzError::InvalidArgument(format!("no node with label `{label}`"))
            }),
        }
    }

    /// Renders the figure as TikZ markup.
    ///
    /// Deterministic and idempotent: the output is a pure function of the
    /// figure's state. Layers render bottom-up in ascending numeric order;
    /// within a layer, items render in insertion order. An empty figure
    /// renders an empty `tikzpicture` envelope.
    pub fn render(&self) -> String {
        let mut script = String::from("\\begin{tikzpicture}\n");

        if self.grid {
            script.push_str("    \\draw[step=1cm, gray, very thin] (-10,-10) grid (10,10);\n");
        }

        for items in self.layers.values() {
            for item in items {
                match item {
                    Item::Node(index) => script.push_str(&self.nodes[*index].to_tikz()),
                    Item::Path(index) => script.push_str(&self.paths[*index].to_tikz(&self.nodes)),
                }
            }
        }

        script.push_str("\\end{tikzpicture}");

        if self.caption.is_some() || self.description.is_some() || self.label.is_some() {
            let mut envelope = String::from("\\begin{figure}\n");
            envelope.push_str(&script);
            envelope.push('\n');
            if let Some(caption) = &self.caption {
                envelope.push_str(&format!("    \\caption{{{caption}}}\n"));
            }
            if let Some(label) = &self.label {
                envelope.push_str(&format!("    \\label{{{label}}}\n"));
            }
            envelope.push_str("\\end{figure}");
            script = envelope;
        }

        debug!(bytes = script.len(); "Rendered TikZ script");
        script
    }

    /// Wraps [`render`](Self::render) output in a minimal standalone LaTeX
    /// document, ready for the external compiler.
    pub fn standalone_document(&self) -> String {
        format!(
            "\\documentclass[border=10pt]{{standalone}}\n\
             \\usepackage{{tikz}}\n\
             \\begin{{document}}\n\
             {}\n\
             \\end{{document}}",
            self.render()
        )
    }

    /// Compiles the figure to a PDF at `output_path` using the default
    /// compiler (`pdflatex`).
    ///
    /// # Errors
    ///
    /// Returns [`TikzError::Compile`] if the compiler cannot be launched,
    /// exits non-zero, or produces no artifact. The temporary working
    /// directory is removed on every exit path.
    pub fn compile(&self, output_path: impl AsRef<FsPath>) -> Result<(), TikzError> {
        let output_path = output_path.as_ref();
        info!(output_path = output_path.display().to_string(); "Compiling figure to PDF");
        Compiler::default().compile(self, output_path)?;
        Ok(())
    }
}
