//! Reading the base character from disk.

use std::path::Path;

use wildshape_domain::BaseCharacter;

use crate::error::LoadError;

/// Parse a base character from JSON. `origin` names the source in errors.
pub fn parse_character(json: &str, origin: &str) -> Result<BaseCharacter, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::json(origin, e))
}

pub fn load_character(path: &Path) -> Result<BaseCharacter, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let character = parse_character(&json, &path.display().to_string())?;
    tracing::debug!(
        name = %character.name,
        level = character.level,
        edl = character.effective_druid_level,
        "Loaded base character"
    );
    Ok(character)
}
