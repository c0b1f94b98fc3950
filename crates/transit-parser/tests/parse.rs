use transit_core::model::{ArrowType, Child, Element, LineType, NoteTarget, Placement};
use transit_parser::{Span, error::ErrorCode, parse};

fn codes(source: &str) -> Vec<Option<ErrorCode>> {
    parse(source)
        .expect_err("source should fail to parse")
        .diagnostics()
        .iter()
        .map(|d| d.code())
        .collect()
}

#[test]
fn two_actor_exchange() {
    let diagram = parse("A->B: hello\nB-->A: world\n").unwrap();

    let actors: Vec<_> = diagram.actors().map(|a| (a.alias(), a.index())).collect();
    assert_eq!(actors, vec![("A", 0), ("B", 1)]);
    assert_eq!(diagram.elements().len(), 2);
    assert!(diagram.blocks().is_empty());

    let Element::Signal(second) = &diagram.elements()[1] else {
        panic!("expected a signal");
    };
    assert_eq!(second.line_type(), LineType::Dotted);
    assert_eq!(second.arrow_type(), ArrowType::Filled);
    assert_eq!(second.message(), "world");
}

#[test]
fn every_arrow_decodes_to_its_signal_type() {
    let diagram = parse("A->B: a\nA-->B: b\nA->>B: c\nA-->>B: d\n").unwrap();

    let types: Vec<_> = diagram
        .elements()
        .iter()
        .map(|element| match element {
            Element::Signal(signal) => (signal.line_type(), signal.arrow_type(), signal.code()),
            Element::Note(_) => panic!("expected only signals"),
        })
        .collect();
    assert_eq!(
        types,
        vec![
            (LineType::Solid, ArrowType::Filled, 0),
            (LineType::Dotted, ArrowType::Filled, 1),
            (LineType::Solid, ArrowType::Open, 4),
            (LineType::Dotted, ArrowType::Open, 5),
        ]
    );
}

#[test]
fn alt_else_block() {
    let source = "\
A -> B: request
alt cache hit
  B -> A: cached
else miss
  B -> A: computed
end
";
    let diagram = parse(source).unwrap();

    assert_eq!(diagram.blocks().len(), 1);
    assert_eq!(diagram.timeline().len(), 2);
    let block = diagram.block(diagram.blocks()[0]);
    assert_eq!(block.title(), Some("cache hit"));
    assert_eq!(block.depth(), 1);
    let labels: Vec<_> = block.partitions().iter().map(|p| p.text()).collect();
    assert_eq!(labels, vec!["alt", "miss"]);
    assert!(block.partitions().iter().all(|p| p.children().len() == 1));
}

#[test]
fn nested_blocks() {
    let source = "\
loop every minute
  opt stale
    A -> B: refresh
  end
end
";
    let diagram = parse(source).unwrap();
    let outer = diagram.block(diagram.blocks()[0]);
    assert_eq!(outer.depth(), 2);

    let [Child::Block(inner)] = outer.partitions()[0].children() else {
        panic!("expected one nested block");
    };
    assert_eq!(diagram.block(*inner).partitions()[0].text(), "opt");
}

#[test]
fn participants_and_notes() {
    let source = "\
title: Checkout flow
participant \"Web Shop\" as W
participant Bank
note right of W: starts here
note over W, Bank: both
W -> Bank: pay
";
    let diagram = parse(source).unwrap();
    assert_eq!(diagram.title(), Some("Checkout flow"));

    let shop = diagram.actor_by_alias("W").unwrap();
    assert_eq!(shop.name(), "Web Shop");
    assert_eq!(shop.index(), 0);

    let Element::Note(both) = &diagram.elements()[1] else {
        panic!("expected a note");
    };
    assert_eq!(both.placement(), Placement::Over);
    assert!(matches!(both.target(), NoteTarget::Two(_, _)));
}

#[test]
fn escaped_newlines_in_messages() {
    let diagram = parse("A -> B: \"two\\nlines\"").unwrap();
    assert_eq!(diagram.elements()[0].message(), "two\nlines");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let diagram = parse("# header\n\n   \nA -> B: x\n# trailer").unwrap();
    assert_eq!(diagram.elements().len(), 1);
}

#[test]
fn errors_are_collected_across_lines() {
    let source = "\
A -> B
what is this
else
end
note over A, A: twice
";
    assert_eq!(
        codes(source),
        vec![
            Some(ErrorCode::E101),
            Some(ErrorCode::E100),
            Some(ErrorCode::E201),
            Some(ErrorCode::E202),
            Some(ErrorCode::E200),
        ]
    );
}

#[test]
fn unclosed_block_points_at_its_start() {
    let source = "A -> B: x\nalt open\n";
    let err = parse(source).unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E203));
    assert_eq!(diag.labels()[0].span(), Span::new(19..19));
    assert_eq!(diag.labels()[1].span(), Span::new(10..18));
    assert!(!diag.labels()[1].is_primary());
}

#[test]
fn error_display_summarizes() {
    let err = parse("nonsense\nmore nonsense").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error[E100]: unrecognized statement `nonsense` (+1 more)"
    );
}
