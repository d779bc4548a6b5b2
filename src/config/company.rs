use serde::Deserialize;

use crate::render::LayoutVariant;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub company: Company,
    pub api: ApiSettings,
    #[serde(default)]
    pub print: PrintSettings,
}

/// Letterhead details printed in the header and footer
#[derive(Debug, Deserialize, Clone)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub location: String,
    #[serde(default)]
    pub phones: Vec<String>,
    pub tax_pin: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Shown as a label only; tax amounts always come from the invoice
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
    #[serde(default)]
    pub footer_note: Option<String>,
}

fn default_vat_rate() -> f64 {
    16.0
}

#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct PrintSettings {
    #[serde(default)]
    pub layout: LayoutVariant,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            layout: LayoutVariant::default(),
            output_dir: default_output_dir(),
        }
    }
}
