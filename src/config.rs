use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use log::info;

use crate::engine::prelude::*;

/// Reads a collection export: a JSON array of owned cards.
pub fn load_collection(path: &Path) -> Result<Vec<OwnedCard>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("unable to read collection {}", path.display()))?;
    let owned: Vec<OwnedCard> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("collection {} is not a list of owned cards", path.display()))?;
    info!("config: loaded {} collection lines from {}", owned.len(), path.display());
    Ok(owned)
}

/// Reads a deck spec from TOML. Missing fields keep their defaults; without
/// a file the defaults are used as is.
pub fn load_spec(path: Option<&Path>) -> Result<DeckSpec> {
    let Some(path) = path else {
        return Ok(DeckSpec::default());
    };
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("unable to read deck spec {}", path.display()))?;
    let spec = toml::from_str(&raw)
        .wrap_err_with(|| format!("deck spec {} is malformed", path.display()))?;
    info!("config: loaded deck spec from {}", path.display());
    Ok(spec)
}
