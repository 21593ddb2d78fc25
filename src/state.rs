use crate::services::prompts::PromptStore;
use std::sync::Arc;

pub struct AppState {
    /// Optional external template store consulted by the responder.
    /// A store that never finds anything is a valid configuration.
    pub prompts: Arc<dyn PromptStore>,
}

pub type SharedState = Arc<AppState>;
