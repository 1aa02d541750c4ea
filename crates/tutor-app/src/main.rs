mod backend;
mod cli;
mod commands;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tutor_common::TutorError;
use tutor_config::TutorConfig;

use cli::{Args, Command};
use store::KeyValueStore;

/// `KEY=VALUE` pairs from `.env` contents, skipping blanks and comments.
fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .collect()
}

/// Load environment variables from a .env file. Variables already set in
/// the environment win. Call only while the process is single-threaded.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive.parse().or_else(|_| "tutor=info".parse()) {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> (TutorConfig, PathBuf, Option<TutorError>) {
    let (loaded, path) = match path {
        Some(path) => (tutor_config::load_config_from(path), path.clone()),
        None => (
            tutor_config::load_config(),
            tutor_config::toml_loader::default_config_path()
                .unwrap_or_else(|_| PathBuf::from("tutor.toml")),
        ),
    };
    match loaded {
        Ok(config) => (config, path, None),
        Err(e) => (TutorConfig::default(), path, Some(e.into())),
    }
}

fn open_store(args: &Args) -> Result<KeyValueStore, TutorError> {
    let dir = args
        .data_dir
        .clone()
        .or_else(store::default_data_dir)
        .ok_or_else(|| TutorError::Other("could not determine data directory".into()))?;
    let store = KeyValueStore::open_in(&dir)?;
    tracing::debug!(path = %store.path().display(), "Store opened");
    Ok(store)
}

async fn run(args: Args, mut config: TutorConfig, config_path: PathBuf) -> Result<(), TutorError> {
    let level = args
        .level
        .clone()
        .unwrap_or_else(|| config.learner.level.clone());
    let ai_err = |e: tutor_ai::AiError| TutorError::Ai(e.to_string());
    let mut stdout = std::io::stdout();
    let stdin = || tokio::io::BufReader::new(tokio::io::stdin());

    match &args.command {
        Command::Chat => {
            let mut store = open_store(&args)?;
            let backend = backend::gemini_client(&config.ai).map_err(ai_err)?;
            commands::run_chat(&backend, &mut store, &level, stdin(), &mut stdout).await
        }
        Command::Lesson { kind, audio: None } => {
            let backend = backend::gemini_client(&config.ai).map_err(ai_err)?;
            commands::run_lesson(&backend, &level, *kind, stdin(), &mut stdout).await
        }
        Command::Lesson {
            kind,
            audio: Some(audio),
        } => {
            let store = open_store(&args)?;
            let backend = backend::gemini_client(&config.ai).map_err(ai_err)?;
            let stt =
                backend::whisper_client(&config.speech, &store.language()?).map_err(ai_err)?;
            commands::run_audio_lesson(&backend, &stt, &level, *kind, audio, &mut stdout).await
        }
        Command::Settings { language, voice } => {
            let mut store = open_store(&args)?;
            commands::run_settings(
                &mut store,
                language.as_deref(),
                voice.as_deref(),
                &mut stdout,
            )
        }
        Command::Profile { name, email } => {
            let mut store = open_store(&args)?;
            commands::run_profile(&mut store, name.as_deref(), email.as_deref(), &mut stdout)
        }
        Command::Reset => {
            let mut store = open_store(&args)?;
            commands::run_reset(&mut store, &mut stdout)
        }
        Command::Config { save_level } => commands::run_config(
            &mut config,
            &config_path,
            save_level.as_deref(),
            &mut stdout,
        ),
    }
}

fn main() -> ExitCode {
    // Runtime threads must not exist yet when the environment is written.
    load_dotenv();

    let args = cli::parse();
    let (config, config_path, config_err) = load_config(args.config.as_ref());

    let directive = match &args.log_level {
        Some(level) => format!("tutor={level}"),
        None => format!("tutor={}", config.logging.level.as_directive()),
    };
    init_logging(&directive);

    tracing::debug!("Tutor v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!(model = %config.ai.model, path = %config_path.display(), "Config loaded");

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(args, config, config_path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_skips_comments_and_strips_quotes() {
        let pairs = parse_dotenv(
            "# keys\nGOOGLE_API_KEY = \"abc\"\n\nOPENAI_API_KEY='def'\nnot a pair\n",
        );
        assert_eq!(
            pairs,
            [("GOOGLE_API_KEY", "abc"), ("OPENAI_API_KEY", "def")]
        );
    }

    #[test]
    fn config_load_falls_back_to_defaults_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ai]\nmax_tokens = 0\n").unwrap();

        let (config, loaded_from, err) = load_config(Some(&path));

        assert_eq!(config.ai.max_tokens, TutorConfig::default().ai.max_tokens);
        assert_eq!(loaded_from, path);
        assert!(err.is_some());
    }
}
