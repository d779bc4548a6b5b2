use clap::ValueEnum;
use serde::Deserialize;

/// Density presets for the printed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// Roomy spacing, full tax/contact block in the header, SKUs under items
    #[default]
    Detailed,
    /// Tighter spacing and smaller type, header shows the tax PIN only
    Compact,
}

/// Concrete sizing and header options for a [`LayoutVariant`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPreset {
    pub page_padding: &'static str,
    pub section_gap: &'static str,
    pub cell_padding: &'static str,
    pub font_scale: f32,
    pub show_contact_details: bool,
    pub show_sku: bool,
}

impl LayoutVariant {
    pub fn preset(self) -> LayoutPreset {
        match self {
            LayoutVariant::Detailed => LayoutPreset {
                page_padding: "1.5rem",
                section_gap: "1rem",
                cell_padding: "0.5rem 0.75rem",
                font_scale: 1.0,
                show_contact_details: true,
                show_sku: true,
            },
            LayoutVariant::Compact => LayoutPreset {
                page_padding: "1rem",
                section_gap: "0.6rem",
                cell_padding: "0.3rem 0.5rem",
                font_scale: 0.9,
                show_contact_details: false,
                show_sku: false,
            },
        }
    }
}
