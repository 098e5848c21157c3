//! TOML diagram description format.
//!
//! A document declares the figure metadata plus `[[node]]` and `[[path]]`
//! tables, in the order they should be added to the figure:
//!
//! ```toml
//! caption = "A closed triangle"
//! label = "fig:triangle"
//!
//! [[node]]
//! label = "A"
//! at = [0.0, 0.0]
//!
//! [[node]]
//! label = "B"
//! at = [2.0, 0.0]
//!
//! [[path]]
//! points = ["A", "B"]
//! actions = ["draw", "rounded corners"]
//! layer = 1
//! cycle = false
//! ```
//!
//! Nodes and paths keep their declaration order within each kind; paths may
//! only reference nodes declared earlier in the file, mirroring the
//! eager-resolution rule of the library API.

use serde::Deserialize;

use tikzgen::options::Options;
use tikzgen::{Node, Path, TikzError, TikzFigure};

use crate::error::CliError;

/// A parsed diagram description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    caption: Option<String>,
    description: Option<String>,
    label: Option<String>,
    #[serde(default)]
    grid: bool,

    #[serde(default, rename = "node")]
    nodes: Vec<NodeSpec>,
    #[serde(default, rename = "path")]
    paths: Vec<PathSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    /// Position as `[x, y]`.
    at: (f64, f64),
    label: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    layer: i32,
    #[serde(default)]
    options: Options,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathSpec {
    /// Node labels, in visiting order.
    points: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
    #[serde(default)]
    cycle: bool,
    #[serde(default)]
    layer: i32,
    #[serde(default)]
    options: Options,
}

impl Document {
    /// Parses a TOML diagram description.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Document`] with the source text attached when
    /// the TOML is malformed or contains unknown fields.
    pub fn parse(src: &str) -> Result<Self, CliError> {
        toml::from_str(src).map_err(|err| CliError::new_document_error(err, src))
    }

    /// Builds a [`TikzFigure`] from this description.
    ///
    /// # Errors
    ///
    /// Returns [`TikzError::InvalidArgument`] for duplicate node labels or
    /// path references to undeclared labels.
    pub fn into_figure(self) -> Result<TikzFigure, TikzError> {
        let mut figure = TikzFigure::new().with_grid(self.grid);
        if let Some(caption) = self.caption {
            figure = figure.with_caption(caption);
        }
        if let Some(description) = self.description {
            figure = figure.with_description(description);
        }
        if let Some(label) = self.label {
            figure = figure.with_label(label);
        }

        for spec in self.nodes {
            let mut node = Node::new(spec.at.0, spec.at.1)
                .with_content(spec.content)
                .with_layer(spec.layer)
                .with_options(spec.options);
            if let Some(label) = spec.label {
                node = node.with_label(label);
            }
            figure.add_node(node)?;
        }

        for spec in self.paths {
            let mut path = Path::through(spec.points)
                .with_actions(spec.actions)
                .with_layer(spec.layer)
                .with_options(spec.options);
            if spec.cycle {
                path = path.closed();
            }
            figure.add_path(path)?;
        }

        Ok(figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc = Document::parse("").expect("empty document is valid");
        let figure = doc.into_figure().expect("empty figure");
        assert_eq!(figure.node_count(), 0);
        assert_eq!(figure.path_count(), 0);
    }

    #[test]
    fn test_parse_full_document() {
        let src = r#"
            caption = "Triangle"
            label = "fig:tri"
            grid = true

            [[node]]
            label = "A"
            at = [0.0, 0.0]
            content = "origin"

            [[node]]
            label = "B"
            at = [2.0, 0.0]
            layer = 2
            [node.options]
            fill = "red"

            [[path]]
            points = ["A", "B"]
            actions = ["draw"]
            cycle = true
            layer = 1
        "#;

        let figure = Document::parse(src)
            .expect("valid document")
            .into_figure()
            .expect("valid figure");

        assert_eq!(figure.node_count(), 2);
        assert_eq!(figure.path_count(), 1);

        let script = figure.render();
        assert!(script.contains("\\caption{Triangle}"));
        assert!(script.contains("\\label{fig:tri}"));
        assert!(script.contains("grid (10,10)"));
        assert!(script.contains("fill={red}"));
        assert!(script.contains("(A) -- (B) -- cycle;"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = Document::parse("captoin = \"typo\"");
        assert!(matches!(result, Err(CliError::Document { .. })));
    }

    #[test]
    fn test_unknown_path_point_is_invalid_argument() {
        let src = r#"
            [[path]]
            points = ["ghost"]
        "#;
        let result = Document::parse(src).expect("parses fine").into_figure();
        assert!(matches!(result, Err(TikzError::InvalidArgument(_))));
    }

    #[test]
    fn test_integer_coordinates_accepted() {
        let src = r#"
            [[node]]
            at = [1, 2]
        "#;
        let figure = Document::parse(src)
            .expect("valid document")
            .into_figure()
            .expect("valid figure");
        assert!(figure.render().contains("(node0) at (1, 2)"));
    }
}
