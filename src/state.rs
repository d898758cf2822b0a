//! Application state: prompt templates and the Gemini client.
//!
//! The client is constructed exactly once at startup from validated env and
//! then passed by reference to the handlers that need it. There is no global
//! singleton and no mutable shared state; the catalogs are free functions.

use tracing::{info, instrument};

use crate::config::{load_prompts_from_env, Prompts};
use crate::gemini::Gemini;

#[derive(Clone)]
pub struct AppState {
    pub gemini: Gemini,
    pub prompts: Prompts,
}

impl AppState {
    /// Build state from env: load prompt overrides, init the Gemini client.
    /// Fails when GEMINI_API_KEY is absent; the caller treats that as fatal.
    #[instrument(level = "info", skip_all)]
    pub fn from_env() -> Result<Self, String> {
        let prompts = load_prompts_from_env().unwrap_or_default();
        let gemini = Gemini::from_env()?;
        info!(
            target: "englify_backend",
            base_url = %gemini.base_url,
            model = %gemini.model,
            "Gemini client initialized"
        );
        Ok(Self { gemini, prompts })
    }
}
