//! Options loading.
//!
//! Options come from an optional JSON file; command flags are applied on top
//! by the individual commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use tally_model::TallyOptions;

/// Load options from `path`, or defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<TallyOptions> {
    let Some(path) = path else {
        return Ok(TallyOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read options file {}", path.display()))?;
    let options: TallyOptions = serde_json::from_str(&text)
        .with_context(|| format!("parse options file {}", path.display()))?;
    debug!(path = %path.display(), "loaded options");
    Ok(options)
}
