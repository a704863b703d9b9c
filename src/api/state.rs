use std::sync::Arc;

use crate::domain::tokenizer::Tokenizer;
use crate::generation::SummaryGenerator;

/// Shared application state injected into handlers
///
/// The generator is optional: without credentials the keyword path still
/// works and the generative route reports itself unavailable.
#[derive(Clone)]
pub struct AppState {
    pub tokenizer: Arc<dyn Tokenizer>,
    pub generator: Option<Arc<dyn SummaryGenerator>>,
}
