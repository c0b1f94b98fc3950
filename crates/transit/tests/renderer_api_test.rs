//! Integration tests for the SequenceRenderer API

use float_cmp::assert_approx_eq;

use transit::{
    SequenceRenderer, TransitError,
    config::AppConfig,
    model::{Diagram, Element},
    text::FixedWidthMetrics,
};

fn renderer() -> SequenceRenderer {
    SequenceRenderer::new(AppConfig::default()).with_metrics(FixedWidthMetrics::default())
}

fn laid_out(source: &str) -> Diagram {
    let renderer = renderer();
    let mut diagram = renderer.parse(source).unwrap();
    renderer.layout(&mut diagram).unwrap();
    diagram
}

#[test]
fn test_render_simple_diagram() {
    let renderer = renderer();
    let diagram = renderer.parse("Alice -> Bob: hello\nBob --> Alice: hi").unwrap();
    let svg = renderer.render_svg(&diagram).unwrap();

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    // Two actors, each drawn in the top and bottom rows.
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains("Alice"));
}

#[test]
fn test_render_does_not_modify_input() {
    let renderer = renderer();
    let diagram = renderer.parse("A -> B: x").unwrap();
    renderer.render_svg(&diagram).unwrap();
    assert_approx_eq!(f32, diagram.width(), 0.0);
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let source = "this is not a statement";
    let err = renderer().parse(source).unwrap_err();

    let TransitError::Parse { err, src } = err else {
        panic!("expected a parse error");
    };
    assert_eq!(src, source);
    assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn test_two_actor_scenario() {
    let diagram = laid_out("A -> B: hello");
    let a = diagram.actor_by_alias("A").unwrap();
    let b = diagram.actor_by_alias("B").unwrap();
    let signal = &diagram.elements()[0];

    // Actors sit at least one signal width apart.
    assert!(b.center_x() - a.center_x() >= signal.text_size().width() + 20.0 - 0.01);
    assert_approx_eq!(f32, signal.bounds().min_x(), a.center_x());
    assert_approx_eq!(f32, signal.bounds().max_x(), b.center_x());
    assert_approx_eq!(
        f32,
        diagram.height(),
        20.0 + 2.0 * diagram.actors_height() + diagram.signals_height()
    );
}

#[test]
fn test_alt_else_scenario() {
    let diagram = laid_out(
        "\
alt success
  A -> B: ok
else failure
  A -> B: error
end
",
    );
    let block = diagram.block(diagram.blocks()[0]);
    assert_eq!(block.depth(), 1);
    assert_eq!(block.partitions().len(), 2);

    let signals: Vec<_> = diagram.elements().iter().map(Element::bounds).collect();
    assert!(signals[1].min_y() >= signals[0].max_y() - 0.01);
    assert_approx_eq!(f32, block.bounds().min_y(), signals[0].min_y());
    assert_approx_eq!(f32, block.bounds().max_y(), signals[1].max_y());
}

#[test]
fn test_note_over_two_actors_scenario() {
    let config = AppConfig::default();
    let layout = config.layout();
    let diagram = laid_out("A -> B: go\nnote over A, B: shared");

    let a = diagram.actor_by_alias("A").unwrap();
    let b = diagram.actor_by_alias("B").unwrap();
    let note = diagram.elements()[1].bounds();
    let reach = layout.note_overlap + layout.note_padding;

    assert_approx_eq!(f32, note.width(), b.center_x() - a.center_x() + 2.0 * reach);
    assert_approx_eq!(f32, note.min_x(), a.center_x() - reach);
}

#[test]
fn test_nested_blocks_render() {
    let renderer = renderer();
    let diagram = renderer
        .parse(
            "\
loop retry
  opt
    A -> B: ping
  end
end
",
        )
        .unwrap();
    let svg = renderer.render_svg(&diagram).unwrap();
    // Four actor boxes and two block frames.
    assert_eq!(svg.matches("<rect").count(), 6);
}

#[test]
fn test_invalid_style_is_config_error() {
    let config: AppConfig = AppConfig::new(
        Default::default(),
        transit::config::StyleConfig::default().with_background_color("not a color"),
    );
    let renderer = SequenceRenderer::new(config).with_metrics(FixedWidthMetrics::default());
    let diagram = renderer.parse("A -> B: x").unwrap();

    let err = renderer.render_svg(&diagram).unwrap_err();
    assert!(matches!(err, TransitError::Config(_)));
}
