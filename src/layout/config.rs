//! Layout thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How grid-row cells share the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthShare {
    /// Every cell gets `1 / columnCount`
    #[default]
    Equal,
    /// Cells are sized by the horizontal span of their tokens
    Proportional,
}

/// Every tunable threshold used by the reconstruction pipeline.
///
/// All distances are in PDF points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Baseline snap distance as a fraction of the larger font size of two
    /// neighbouring tokens
    pub line_tolerance_factor: f32,
    /// Lines above this fraction of the page height are headers
    pub header_fraction: f32,
    /// Lines below this fraction of the page height are footers
    pub footer_fraction: f32,
    /// Absolute minimum gap that separates two columns
    pub column_gap_threshold: f32,
    /// Gap, in average glyph widths of the left token, that separates two columns
    pub column_gap_multiplier: f32,
    /// Gap above which a space is inserted between two runs
    pub word_gap_threshold: f32,
    /// Multiplier from points to output indentation units
    /// (20 converts points to twips)
    pub indent_scale: f32,
    /// Average glyph width as a fraction of font size, used when a token has
    /// no usable width
    pub glyph_width_factor: f32,
    /// Grid-row cell sizing
    pub width_share: WidthShare,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_tolerance_factor: 0.5,
            header_fraction: 0.90,
            footer_fraction: 0.10,
            column_gap_threshold: 20.0,
            column_gap_multiplier: 3.0,
            word_gap_threshold: 2.0,
            indent_scale: 20.0,
            glyph_width_factor: 0.5,
            width_share: WidthShare::Equal,
        }
    }
}

impl LayoutConfig {
    /// Create a config with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line tolerance factor.
    pub fn with_line_tolerance_factor(mut self, factor: f32) -> Self {
        self.line_tolerance_factor = factor;
        self
    }

    /// Set the header and footer fractions.
    pub fn with_regions(mut self, header_fraction: f32, footer_fraction: f32) -> Self {
        self.header_fraction = header_fraction;
        self.footer_fraction = footer_fraction;
        self
    }

    /// Set the absolute column gap threshold.
    pub fn with_column_gap_threshold(mut self, points: f32) -> Self {
        self.column_gap_threshold = points;
        self
    }

    /// Set the column gap multiplier.
    pub fn with_column_gap_multiplier(mut self, multiplier: f32) -> Self {
        self.column_gap_multiplier = multiplier;
        self
    }

    /// Set the word gap threshold.
    pub fn with_word_gap_threshold(mut self, points: f32) -> Self {
        self.word_gap_threshold = points;
        self
    }

    /// Set the indentation scale.
    pub fn with_indent_scale(mut self, scale: f32) -> Self {
        self.indent_scale = scale;
        self
    }

    /// Set the glyph width factor.
    pub fn with_glyph_width_factor(mut self, factor: f32) -> Self {
        self.glyph_width_factor = factor;
        self
    }

    /// Set the grid cell sizing mode.
    pub fn with_width_share(mut self, mode: WidthShare) -> Self {
        self.width_share = mode;
        self
    }

    /// Size grid cells by token span.
    pub fn proportional(mut self) -> Self {
        self.width_share = WidthShare::Proportional;
        self
    }

    /// Gap above which two adjacent tokens fall into different columns.
    pub fn column_gap_limit(&self, char_width: f32) -> f32 {
        self.column_gap_threshold
            .max(char_width * self.column_gap_multiplier)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("line_tolerance_factor", self.line_tolerance_factor),
            ("column_gap_threshold", self.column_gap_threshold),
            ("column_gap_multiplier", self.column_gap_multiplier),
            ("word_gap_threshold", self.word_gap_threshold),
            ("indent_scale", self.indent_scale),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.glyph_width_factor.is_finite() || self.glyph_width_factor <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "glyph_width_factor must be positive, got {}",
                self.glyph_width_factor
            )));
        }

        let fractions = 0.0_f32..=1.0;
        if !fractions.contains(&self.header_fraction) || !fractions.contains(&self.footer_fraction)
        {
            return Err(Error::InvalidConfig(format!(
                "region fractions must lie in [0, 1], got header={} footer={}",
                self.header_fraction, self.footer_fraction
            )));
        }
        if self.footer_fraction > self.header_fraction {
            return Err(Error::InvalidConfig(format!(
                "footer_fraction ({}) exceeds header_fraction ({})",
                self.footer_fraction, self.header_fraction
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.column_gap_threshold, 20.0);
        assert_eq!(config.column_gap_multiplier, 3.0);
        assert_eq!(config.width_share, WidthShare::Equal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LayoutConfig::new()
            .with_column_gap_threshold(18.0)
            .with_indent_scale(12.0)
            .proportional();
        assert_eq!(config.column_gap_threshold, 18.0);
        assert_eq!(config.indent_scale, 12.0);
        assert_eq!(config.width_share, WidthShare::Proportional);
    }

    #[test]
    fn test_column_gap_limit() {
        let config = LayoutConfig::default();
        // Small glyphs: absolute floor wins
        assert_eq!(config.column_gap_limit(5.0), 20.0);
        // Large glyphs: multiple of glyph width wins
        assert_eq!(config.column_gap_limit(10.0), 30.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(LayoutConfig::new()
            .with_column_gap_threshold(f32::NAN)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_regions(0.2, 0.5)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_glyph_width_factor(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "column_gap_threshold": 25.0 }"#).unwrap();
        assert_eq!(config.column_gap_threshold, 25.0);
        assert_eq!(config.indent_scale, 20.0);
    }
}
