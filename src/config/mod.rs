mod company;
mod credentials;

pub use company::{ApiSettings, Company, Config, PrintSettings};
pub use credentials::{Credential, TOKEN_KEY};

use crate::error::{PrintError, Result};
use credentials::CredentialFile;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (XDG config dir, falling back to ~/.invoice-print/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoice-print") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = dirs_home().ok_or_else(|| {
        PrintError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoice-print"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve the HTML output directory; relative paths live under the config dir
pub fn resolve_output_dir(output_dir: &str, config_dir: &PathBuf) -> PathBuf {
    let path = expand_path(output_dir);
    if path.is_absolute() {
        path
    } else {
        config_dir.join(path)
    }
}

pub fn credentials_file(config_dir: &PathBuf) -> PathBuf {
    config_dir.join("credentials.toml")
}

/// Load the main config.toml
pub fn load_config(config_dir: &PathBuf) -> Result<Config> {
    if !config_dir.exists() {
        return Err(PrintError::ConfigNotFound(config_dir.clone()));
    }
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(PrintError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| PrintError::ConfigParse { path, source: e })
}

/// Read the stored API token. A missing file or blank token yields `None`.
pub fn load_credential(config_dir: &PathBuf) -> Result<Option<Credential>> {
    let path = credentials_file(config_dir);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let file: CredentialFile =
        toml::from_str(&content).map_err(|e| PrintError::ConfigParse { path, source: e })?;
    Ok(file.token.and_then(Credential::new))
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[company]
name = "ELEGANT STEEL"
tagline = "EASTERN BYPASS"
location = "Eastern Bypass, Nairobi"
phones = ["0726788925", "0111478454"]
tax_pin = "P000000000A"
# logo = "https://example.com/images/logo.jpg"   # optional
vat_rate = 16.0                                   # label only, amounts come from the API
# footer_note = "Goods once sold are not returnable."

[api]
base_url = "http://localhost:3000"
timeout_secs = 10

[print]
layout = "detailed"      # or "compact"
output_dir = "output"    # relative to this directory, or absolute / ~/...
"#;

/// Template content for credentials.toml
pub const CREDENTIALS_TEMPLATE: &str = r#"# Bearer token sent as `Authorization: Bearer <token>` when fetching invoices.
# Paste the dashboard session token here.
token = ""
"#;
