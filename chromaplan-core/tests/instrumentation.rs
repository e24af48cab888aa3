//! Span and event coverage for the core operations.
use chromaplan_core::{GraphGenerator, greedy_color};
use chromaplan_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
fn generation_and_coloring_emit_spans() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let coloring = tracing::subscriber::with_default(subscriber, || {
        let graph = GraphGenerator::new(10)
            .expect("target is valid")
            .generate();
        greedy_color(&graph)
    });
    assert_eq!(coloring.len(), 10);

    let spans = layer.spans();
    let generate = spans
        .iter()
        .find(|span| span.name == "core.generate")
        .expect("core.generate span must exist");
    assert_eq!(generate.fields.get("target"), Some(&"10".to_owned()));
    let sweeps = spans
        .iter()
        .filter(|span| span.name == "core.find_triangles")
        .count();
    assert_eq!(sweeps, 3);
    assert!(spans.iter().any(|span| span.name == "core.greedy_color"));

    let completed = layer
        .events()
        .into_iter()
        .find(|event| {
            event.level == Level::INFO
                && event.fields.get("message") == Some(&"generation completed".to_owned())
        })
        .expect("generation completion event must exist");
    assert_eq!(completed.fields.get("vertices"), Some(&"10".to_owned()));
    assert_eq!(completed.fields.get("edges"), Some(&"24".to_owned()));
}
