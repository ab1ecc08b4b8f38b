use std::sync::Arc;

use recap::application::ports::Extractor;
use recap::application::services::ExtractorRegistry;
use recap::domain::{ExtractorKind, SourceReference};

use crate::common::CountingExtractor;

#[test]
fn given_extractors_when_building_registry_then_keys_by_kind() {
    let registry = ExtractorRegistry::new(vec![
        Arc::new(CountingExtractor::new(ExtractorKind::Pdf, vec![])) as Arc<dyn Extractor>,
        Arc::new(CountingExtractor::new(ExtractorKind::PlainText, vec![])),
    ]);

    assert_eq!(
        registry.get(ExtractorKind::Pdf).map(|e| e.kind()),
        Some(ExtractorKind::Pdf)
    );
    assert!(registry.get(ExtractorKind::Docx).is_none());
    assert_eq!(registry.kinds().len(), 2);
}

#[test]
fn given_empty_registry_when_registering_then_extractor_becomes_available() {
    let mut registry = ExtractorRegistry::default();

    registry.register(Arc::new(CountingExtractor::new(ExtractorKind::Docx, vec![])));

    assert!(registry.get(ExtractorKind::Docx).is_some());
}

#[tokio::test]
async fn given_duplicate_kind_when_registering_then_last_one_wins() {
    let first = Arc::new(CountingExtractor::new(ExtractorKind::Pdf, vec!["first"]));
    let second = Arc::new(CountingExtractor::new(ExtractorKind::Pdf, vec!["second"]));
    let mut registry = ExtractorRegistry::new(vec![Arc::clone(&first) as Arc<dyn Extractor>]);

    registry.register(Arc::clone(&second) as Arc<dyn Extractor>);
    let units = registry
        .get(ExtractorKind::Pdf)
        .unwrap()
        .extract(&SourceReference::YouTubeUrl("unused".to_string()))
        .await
        .unwrap();

    assert_eq!(registry.kinds(), vec![ExtractorKind::Pdf]);
    assert_eq!(units[0].as_str(), "second");
    assert_eq!((first.calls(), second.calls()), (0, 1));
}
