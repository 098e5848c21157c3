//! Integration tests for the TikzFigure API
//!
//! These tests verify the public API end to end: label generation, layer
//! ordering, envelope emission, and the compile path (using substitute
//! compiler commands so a LaTeX installation is not required).

use tikzgen::{CompileError, Node, Path, TikzError, TikzFigure};

#[test]
fn test_auto_labels_independent_of_layers() {
    let mut figure = TikzFigure::new();
    let ids: Vec<_> = [3, 0, 7, 0]
        .iter()
        .map(|layer| {
            figure
                .add_node(Node::new(0.0, 0.0).with_layer(*layer))
                .expect("auto-labeled node")
        })
        .collect();

    for (n, id) in ids.iter().enumerate() {
        assert_eq!(figure.node(*id).label(), Some(format!("node{n}").as_str()));
    }
}

#[test]
fn test_figure_envelope_wraps_scene_when_captioned() {
    let mut figure = TikzFigure::new().with_caption("Fig");
    figure
        .add_node(Node::new(0.0, 0.0).with_label("A"))
        .unwrap();

    let script = figure.render();
    let figure_open = script.find("\\begin{figure}").expect("figure envelope");
    let scene_open = script.find("\\begin{tikzpicture}").expect("scene envelope");
    let scene_close = script.find("\\end{tikzpicture}").expect("scene close");
    let figure_close = script.find("\\end{figure}").expect("figure close");
    assert!(figure_open < scene_open && scene_close < figure_close);
}

#[test]
fn test_no_metadata_means_no_figure_envelope() {
    let mut figure = TikzFigure::new();
    figure
        .add_node(Node::new(0.0, 0.0).with_label("A"))
        .unwrap();

    let script = figure.render();
    assert!(script.starts_with("\\begin{tikzpicture}"));
    assert!(!script.contains("\\begin{figure}"));
}

#[test]
fn test_path_before_nodes_fails() {
    let mut figure = TikzFigure::new();
    let result = figure.add_path(Path::through(["X", "Y"]));
    assert!(matches!(result, Err(TikzError::InvalidArgument(_))));
}

#[test]
fn test_render_twice_is_byte_identical() {
    let mut figure = TikzFigure::new().with_caption("stable").with_grid(true);
    figure
        .add_node(Node::new(0.5, 0.5).with_option("fill", "red"))
        .unwrap();
    figure
        .add_node(Node::new(1.5, 0.5).with_label("B").with_layer(2))
        .unwrap();
    figure
        .add_path(Path::through(["node0", "B"]).with_layer(1))
        .unwrap();

    assert_eq!(figure.render(), figure.render());
}

#[test]
fn test_layer_order_is_numeric_ascending() {
    let mut figure = TikzFigure::new();
    figure
        .add_node(Node::new(0.0, 0.0).with_label("A").with_layer(2))
        .unwrap();
    figure
        .add_node(Node::new(1.0, 0.0).with_label("B").with_layer(0))
        .unwrap();
    figure
        .add_node(Node::new(2.0, 0.0).with_label("C").with_layer(1))
        .unwrap();

    let script = figure.render();
    let order: Vec<usize> = ["(B)", "(C)", "(A)"]
        .iter()
        .map(|needle| script.find(needle).expect("node emitted"))
        .collect();
    assert!(order[0] < order[1] && order[1] < order[2]);
}

#[test]
fn test_cycle_closes_back_to_first_point() {
    let mut figure = TikzFigure::new();
    for (i, label) in ["A", "B", "C"].iter().enumerate() {
        figure
            .add_node(Node::new(i as f64, 0.0).with_label(*label))
            .unwrap();
    }
    figure
        .add_path(Path::through(["A", "B", "C"]).closed())
        .unwrap();

    assert!(figure.render().contains("(A) -- (B) -- (C) -- cycle;"));
}

/// Lists `tikzgen-` temp directories currently present on disk.
fn tikzgen_temp_dirs() -> Vec<std::path::PathBuf> {
    let mut dirs: Vec<_> = std::fs::read_dir(std::env::temp_dir())
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.is_dir()
                        && path
                            .file_name()
                            .and_then(|name| name.to_str())
                            .is_some_and(|name| name.starts_with("tikzgen-"))
                })
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[cfg(unix)]
#[test]
fn test_compile_failures_clean_up_temp_dir() {
    use std::os::unix::fs::PermissionsExt;

    let mut figure = TikzFigure::new();
    figure
        .add_node(Node::new(0.0, 0.0).with_label("A"))
        .unwrap();

    let before = tikzgen_temp_dirs();

    // Compiler that "succeeds" and deposits the conventional artifact.
    let scratch = tempfile::tempdir().expect("test scratch dir");
    let fake = scratch.path().join("fake-latex");
    std::fs::write(&fake, "#!/bin/sh\nprintf 'PDF' > figure.pdf\n").unwrap();
    let mut perms = std::fs::metadata(&fake).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&fake, perms).unwrap();
    let compiler = tikzgen::Compiler::new(fake.to_string_lossy());

    // Success: artifact lands at the requested path.
    let out = scratch.path().join("out.pdf");
    compiler.compile(&figure, &out).expect("fake compile");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "PDF");

    // Overwrite: compiling again onto an existing file succeeds.
    compiler.compile(&figure, &out).expect("overwrite compile");

    // Invalid target path: parent directory does not exist.
    let bad_target = scratch.path().join("no-such-dir").join("out.pdf");
    let err = compiler.compile(&figure, &bad_target).unwrap_err();
    assert!(matches!(err, CompileError::Io(_)));

    // Non-zero exit surfaces the Failed kind.
    let err = tikzgen::Compiler::new("false")
        .compile(&figure, &out)
        .unwrap_err();
    assert!(matches!(err, CompileError::Failed { .. }));

    // Zero exit without artifact surfaces MissingArtifact.
    let err = tikzgen::Compiler::new("true")
        .compile(&figure, &out)
        .unwrap_err();
    assert!(matches!(err, CompileError::MissingArtifact { .. }));

    // No working directory leaked by any of the calls above.
    let leaked: Vec<_> = tikzgen_temp_dirs()
        .into_iter()
        .filter(|dir| !before.contains(dir))
        .collect();
    assert!(leaked.is_empty(), "leaked temp dirs: {leaked:?}");
}
