//! tikzgen - A layered node/path diagram model that renders to TikZ.
//!
//! Diagrams are declared as nodes (labeled points at absolute coordinates)
//! and paths (connectors through nodes), each tagged with an integer layer.
//! [`TikzFigure::render`] serializes the model deterministically into TikZ
//! markup; [`TikzFigure::compile`] additionally drives an external LaTeX
//! engine to produce a PDF.
//!
//! # Example
//!
//! ```
//! use tikzgen::{Node, Path, TikzFigure};
//!
//! let mut figure = TikzFigure::new()
//!     .with_caption("A closed triangle")
//!     .with_label("fig:triangle");
//!
//! figure.add_node(Node::new(0.0, 0.0).with_label("A"))?;
//! figure.add_node(Node::new(2.0, 0.0).with_label("B"))?;
//! figure.add_node(Node::new(1.0, 1.5).with_label("C"))?;
//!
//! figure.add_path(
//!     Path::through(["A", "B", "C"])
//!         .with_action("draw")
//!         .with_action("rounded corners")
//!         .closed()
//!         .with_layer(1),
//! )?;
//!
//! let tikz = figure.render();
//! assert!(tikz.contains("-- cycle"));
//!
//! // figure.compile("triangle.pdf")?; // requires pdflatex on PATH
//! # Ok::<(), tikzgen::TikzError>(())
//! ```

pub mod compile;
pub mod options;

mod error;
mod figure;
mod node;
mod path;

pub use compile::Compiler;
pub use error::{CompileError, TikzError};
pub use figure::TikzFigure;
pub use node::{Node, NodeId};
pub use path::{Path, PathId, PointRef};
