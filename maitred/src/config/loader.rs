//! Configuration loading.
//!
//! Resolution order: an explicit `MAITRED_CONFIG` path, then
//! `~/.maitred/maitred.yaml` if present, then built-in defaults.

use std::env;
use std::path::Path;

use crate::database::default_data_dir;
use crate::error::Result;

use super::schema::Config;

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// valid configuration document.
///
/// # Examples
///
/// ```no_run
/// use maitred::config::load_from_path;
/// use std::path::Path;
///
/// let config = load_from_path(Path::new("/etc/maitred.yaml")).unwrap();
/// println!("{config:?}");
/// ```
pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Loads configuration from the environment.
///
/// Checks `MAITRED_CONFIG` first, then `~/.maitred/maitred.yaml`, and
/// falls back to defaults when neither exists.
///
/// # Errors
///
/// Returns an error if a configuration file is found but cannot be read
/// or parsed.
pub fn load() -> Result<Config> {
    if let Ok(path) = env::var("MAITRED_CONFIG") {
        return load_from_path(Path::new(&path));
    }

    if let Ok(data_dir) = default_data_dir() {
        let candidate = data_dir.join("maitred.yaml");
        if candidate.exists() {
            return load_from_path(&candidate);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maitred.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log_mode: quiet").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.log_mode.as_deref(), Some("quiet"));
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_from_path(&dir.path().join("absent.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_path_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maitred.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log_mode: [unclosed").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
    }
}
