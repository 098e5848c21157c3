//! Example: Drawing the "MPL" logo as a TikZ figure
//!
//! Each letter is a set of nodes on layer 0 connected by a rounded-corner
//! path on layer 1. Prints the generated TikZ markup; pass an output path
//! as the first argument to also compile it to a PDF (requires pdflatex).

use tikzgen::{Node, Path, TikzFigure};

const LETTERS: [&[(f64, f64)]; 3] = [
    // M
    &[(0.0, 0.0), (0.0, 3.0), (1.0, 2.0), (2.0, 3.0), (2.0, 0.0)],
    // P
    &[(3.0, 0.0), (3.0, 3.0), (4.0, 2.5), (4.0, 1.5), (3.0, 1.0)],
    // L
    &[(5.0, 3.0), (5.0, 0.0), (7.0, 0.0)],
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut figure = TikzFigure::new();

    for (letter, points) in LETTERS.iter().enumerate() {
        let labels: Vec<String> = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let label = format!("L{letter}P{i}");
                figure.add_node(Node::new(*x, *y).with_label(&label).with_layer(0))?;
                Ok::<_, tikzgen::TikzError>(label)
            })
            .collect::<Result<_, _>>()?;

        figure.add_path(
            Path::through(labels)
                .with_actions(["draw", "rounded corners", "line width=3"])
                .with_layer(1),
        )?;
    }

    println!("{}", figure.render());

    if let Some(output_path) = std::env::args().nth(1) {
        figure.compile(&output_path)?;
        println!("PDF written to {output_path}");
    }

    Ok(())
}
