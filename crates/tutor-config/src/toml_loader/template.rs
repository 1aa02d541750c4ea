//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tutor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[ai]
# model = "gemini-pro"
# max_tokens = 2048       # 1-32768
# temperature = 0.7       # 0.0-2.0
# api_key_env = "GOOGLE_API_KEY"   # variable holding the API key
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"

[learner]
# level = "intermediate"  # free-form, e.g. beginner, intermediate, advanced

[speech]
# whisper_model = "whisper-1"
# api_key_env = "OPENAI_API_KEY"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
