#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("API key is missing: set {env_var} or add it to '{secrets_file}'")]
    MissingApiKey {
        env_var: String,
        secrets_file: String,
    },
}
