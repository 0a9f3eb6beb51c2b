use planwright_llm::LlmError;
use planwright_llm::any::AnyProvider;
use planwright_llm::compatible::CompatibleProvider;
use planwright_llm::openai::OpenAiProvider;
use planwright_llm::provider::{LlmProvider, Message};

use crate::config::Config;
use crate::error::CoreError;
use crate::form::LessonForm;
use crate::prompt::build_prompt;
use crate::vault::Secret;

/// Build the completion backend named by the config.
///
/// The credential is an explicit argument; its absence fails here, before
/// any HTTP client work happens.
///
/// # Errors
///
/// Returns [`CoreError::MissingApiKey`] when `api_key` is `None`.
pub fn create_provider(config: &Config, api_key: Option<Secret>) -> Result<AnyProvider, CoreError> {
    let key = api_key.ok_or_else(|| CoreError::MissingApiKey {
        env_var: config.llm.api_key_env.clone(),
        secrets_file: config.secrets.file.clone(),
    })?;

    let llm = &config.llm;
    let provider = match llm.provider.as_str() {
        "openai" => AnyProvider::OpenAi(OpenAiProvider::new(
            key.expose().to_owned(),
            llm.base_url.clone(),
            llm.model.clone(),
            llm.max_tokens,
            llm.temperature,
        )),
        other => AnyProvider::Compatible(CompatibleProvider::new(
            other.to_owned(),
            key.expose().to_owned(),
            llm.base_url.clone(),
            llm.model.clone(),
            llm.max_tokens,
            llm.temperature,
        )),
    };
    Ok(provider)
}

/// One generation round trip: assemble the prompt, send it as a single user
/// message, return the raw response text unparsed.
///
/// # Errors
///
/// Propagates the provider error unchanged.
pub async fn generate_plan(
    provider: &impl LlmProvider,
    template_text: &str,
    form: &LessonForm,
) -> Result<String, LlmError> {
    let prompt = build_prompt(template_text, form);
    tracing::info!(
        provider = provider.name(),
        prompt_chars = prompt.len(),
        "requesting lesson plan"
    );
    provider.chat(&[Message::user(prompt)]).await
}
