//! Settings, profile, transcript reset, and config commands.

use std::io::Write;
use std::path::Path;

use tutor_common::TutorError;
use tutor_config::TutorConfig;

use crate::store::prefs::{
    language_label, UserProfile, Voice, CHAT_HISTORY_KEY, SUPPORTED_LANGUAGES,
};
use crate::store::KeyValueStore;

pub fn run_settings<W: Write>(
    store: &mut KeyValueStore,
    language: Option<&str>,
    voice: Option<&str>,
    out: &mut W,
) -> Result<(), TutorError> {
    if let Some(code) = language {
        store.set_language(code)?;
    }
    if let Some(voice) = voice {
        store.set_voice(voice.parse::<Voice>()?)?;
    }

    let current = store.language()?;
    writeln!(out, "Language:")?;
    for (label, code) in SUPPORTED_LANGUAGES {
        let marker = if code == current { '*' } else { ' ' };
        writeln!(out, " {marker} {label} ({code})")?;
    }
    writeln!(out, "Voice: {}", store.voice()?)?;
    Ok(())
}

/// Create the profile on first use (both name and email are required
/// then); afterwards either field can be updated on its own.
pub fn run_profile<W: Write>(
    store: &mut KeyValueStore,
    name: Option<&str>,
    email: Option<&str>,
    out: &mut W,
) -> Result<(), TutorError> {
    let profile = match (store.profile()?, name, email) {
        (Some(mut profile), name, email) => {
            if let Some(name) = name {
                profile.name = name.to_string();
            }
            if let Some(email) = email {
                profile.email = email.to_string();
            }
            if name.is_some() || email.is_some() {
                store.set_profile(&profile)?;
            }
            profile
        }
        (None, Some(name), Some(email)) if !name.trim().is_empty() && !email.trim().is_empty() => {
            let mut profile = UserProfile::new(name, email);
            profile.language = store.language()?;
            store.set_profile(&profile)?;
            profile
        }
        (None, None, None) => {
            writeln!(out, "No profile yet. Create one with --name and --email.")?;
            return Ok(());
        }
        (None, _, _) => {
            return Err(TutorError::Other(
                "please enter both a name and an email".into(),
            ));
        }
    };

    writeln!(out, "Name: {}", profile.name)?;
    writeln!(out, "Email: {}", profile.email)?;
    let label = language_label(&profile.language).unwrap_or(profile.language.as_str());
    writeln!(out, "Language: {label}")?;
    writeln!(out, "Progress: {:.0}%", profile.progress)?;
    writeln!(out, "Lessons completed: {}", profile.lessons_completed)?;
    Ok(())
}

pub fn run_reset<W: Write>(store: &mut KeyValueStore, out: &mut W) -> Result<(), TutorError> {
    if !store.contains(CHAT_HISTORY_KEY) {
        writeln!(out, "Chat history is already empty.")?;
        return Ok(());
    }
    store.clear_transcript()?;
    writeln!(out, "Chat history cleared.")?;
    Ok(())
}

/// Print the effective config; with `save_level`, persist a new learner
/// level to `path` first.
///
/// The level is written into the file as stored, never into `config`:
/// a file that failed to load is replaced by defaults in memory, and
/// saving those would drop the learner's other settings. A file that
/// does not parse or validate is left untouched and the error returned.
pub fn run_config<W: Write>(
    config: &mut TutorConfig,
    path: &Path,
    save_level: Option<&str>,
    out: &mut W,
) -> Result<(), TutorError> {
    if let Some(level) = save_level {
        let mut stored = tutor_config::toml_loader::load_or_create(path)?;
        stored.learner.level = level.to_string();
        tutor_config::validation::validate(&stored)?;
        tutor_config::save_config_to_path(&stored, path)?;
        writeln!(out, "Saved learner level to {}", path.display())?;
        *config = stored;
    }
    write!(out, "{}", tutor_config::config_to_toml(config)?)?;
    Ok(())
}
