use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::Extractor;
use crate::domain::ExtractorKind;

/// Extractors keyed by the kind they handle, registered once at startup.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<ExtractorKind, Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    pub fn new(extractors: Vec<Arc<dyn Extractor>>) -> Self {
        Self {
            extractors: extractors.into_iter().map(|e| (e.kind(), e)).collect(),
        }
    }

    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        self.extractors.insert(extractor.kind(), extractor);
    }

    pub fn get(&self, kind: ExtractorKind) -> Option<&Arc<dyn Extractor>> {
        self.extractors.get(&kind)
    }

    pub fn kinds(&self) -> Vec<ExtractorKind> {
        self.extractors.keys().copied().collect()
    }
}
