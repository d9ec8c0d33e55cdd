use pokechain::{Criteria, Error};

use std::fs;
use std::path::{Path, PathBuf};

/// Loads the generation criteria.
///
/// An explicit path must exist. Otherwise, the default configuration file is
/// read if present, falling back to the default criteria.
pub fn load(path: Option<&Path>) -> Result<Criteria, Error> {
    if let Some(path) = path {
        return read(path);
    }

    let path = default_path();

    if !path.exists() {
        log::debug!("No configuration found at {}", path.display());

        return Ok(Criteria::default());
    }

    read(&path)
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("criteria.ron")
}

fn read(path: &Path) -> Result<Criteria, Error> {
    let source = fs::read_to_string(path).map_err(pokechain::core::Error::from)?;

    let criteria = ron::from_str(&source)
        .map_err(|error| Error::InvalidCriteria(format!("{}: {error}", path.display())))?;

    log::info!("Loaded criteria from {}", path.display());

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_files_are_ron() {
        let criteria: Criteria =
            ron::from_str("(length: 10, allow_monotype: false)").unwrap();

        assert_eq!(criteria.length, 10);
        assert!(!criteria.allow_monotype);
        assert_eq!(criteria.typing_limit, Criteria::default().typing_limit);
    }

    #[test]
    fn explicit_paths_must_exist() {
        let missing = std::env::temp_dir().join("dexchain-missing-criteria.ron");

        assert!(matches!(
            load(Some(missing.as_path())),
            Err(Error::Dex(pokechain::core::Error::Io(_)))
        ));
    }

    #[test]
    fn malformed_files_are_invalid_criteria() {
        let path = std::env::temp_dir().join(format!(
            "dexchain-malformed-criteria-{}.ron",
            std::process::id()
        ));
        fs::write(&path, "(length: \"five\")").unwrap();

        let result = load(Some(&path));
        let _ = fs::remove_file(&path);

        let error = result.unwrap_err();
        assert!(matches!(error, Error::InvalidCriteria(_)));
        assert_eq!(error.report().code, 120);
    }
}
