//! Connector entities ("paths") drawn through an ordered sequence of nodes.
//!
//! A [`Path`] visits nodes either by [`NodeId`] handle or by label; label
//! references are resolved eagerly when the path is added to a figure, so a
//! stored path only ever holds resolved handles. Raw path actions (`draw`,
//! `rounded corners`, `fill`, …) are carried verbatim and prepended to the
//! option list of the emitted statement.

use crate::node::{Node, NodeId};
use crate::options::{Options, Value};

/// Opaque handle to a path stored in a [`TikzFigure`](crate::TikzFigure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(pub(crate) usize);

/// A reference to a node: either a handle returned by `add_node`, or a
/// label resolved when the path is added.
#[derive(Debug, Clone, PartialEq)]
pub enum PointRef {
    /// Direct handle to a node in the same figure.
    Id(NodeId),
    /// Node label, resolved by exact match at `add_path` time.
    Label(String),
}

impl From<NodeId> for PointRef {
    fn from(id: NodeId) -> Self {
        PointRef::Id(id)
    }
}

impl From<&str> for PointRef {
    fn from(label: &str) -> Self {
        PointRef::Label(label.to_string())
    }
}

impl From<String> for PointRef {
    fn from(label: String) -> Self {
        PointRef::Label(label)
    }
}

impl From<&String> for PointRef {
    fn from(label: &String) -> Self {
        PointRef::Label(label.clone())
    }
}

/// A connector through two or more nodes, with raw path actions, an
/// optional closing segment, a layer, and style options.
///
/// # Example
///
/// ```
/// use tikzgen::Path;
///
/// let path = Path::through(["A", "B", "C"])
///     .with_action("draw")
///     .with_action("rounded corners")
///     .closed()
///     .with_layer(1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<PointRef>,
    actions: Vec<String>,
    cycle: bool,
    layer: i32,
    options: Options,
}

impl Path {
    /// Creates a path visiting the given points in order.
    pub fn through<I, R>(points: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<PointRef>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            actions: Vec::new(),
            cycle: false,
            layer: 0,
            options: Options::new(),
        }
    }

    /// Appends one raw path action (`draw`, `fill`, `rounded corners`, …).
    ///
    /// Actions are emitted verbatim, before the style options, in the order
    /// they were added.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    /// Appends several raw path actions at once.
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    /// Closes the path back to its first point.
    pub fn closed(mut self) -> Self {
        self.cycle = true;
        self
    }

    /// Sets the rendering layer. Defaults to 0.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Adds one style option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Replaces the whole option bag.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// The point references, as declared.
    pub fn points(&self) -> &[PointRef] {
        &self.points
    }

    /// Raw path actions, in declaration order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Whether the path closes back to its first point.
    pub fn is_closed(&self) -> bool {
        self.cycle
    }

    /// Rendering layer.
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Style options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn into_parts(self) -> (Vec<PointRef>, Vec<String>, bool, i32, Options) {
        (
            self.points,
            self.actions,
            self.cycle,
            self.layer,
            self.options,
        )
    }
}

/// A path whose references have all been resolved to node indices.
///
/// This is what a figure actually stores; resolution happens once, in
/// `add_path`, so rendering never fails.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPath {
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) actions: Vec<String>,
    pub(crate) cycle: bool,
    pub(crate) layer: i32,
    pub(crate) options: Options,
}

impl ResolvedPath {
    /// Serializes this path as a TikZ `\draw` (no actions) or `\path`
    /// (explicit actions) statement, chaining node labels with `--`.
    pub(crate) fn to_tikz(&self, nodes: &[Node]) -> String {
        let mut option_list: Vec<String> = self.actions.clone();
        if !self.options.is_empty() {
            option_list.push(self.options.to_tikz());
        }
        let joined = option_list.join(", ");

        // With no explicit actions the statement defaults to drawing;
        // explicit actions take full control via \path.
        let (command, options) = if self.actions.is_empty() {
            let opts = if joined.is_empty() {
                String::new()
            } else {
                format!("[{joined}]")
            };
            ("\\draw", opts)
        } else {
            ("\\path", format!("[{joined}]"))
        };

        let mut chain = self
            .nodes
            .iter()
            .map(|id| format!("({})", nodes[id.0].label().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(" -- ");
        if self.cycle {
            chain.push_str(" -- cycle");
        }

        format!("    {command}{options} {chain};\n")
    }
}
