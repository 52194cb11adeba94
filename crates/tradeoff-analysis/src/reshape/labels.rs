//! Locale-aware number formatting for panel labels.

use tradeoff_core::config::LocaleConfig;
use tradeoff_core::constants::DEFAULT_DIGITS;
use tradeoff_core::types::Language;

/// Formats values the way labels are printed in the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFormatter {
    language: Language,
    digits: u32,
}

impl ValueFormatter {
    pub fn new(language: Language, digits: u32) -> Self {
        Self { language, digits }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(config.effective_language(), config.effective_digits())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn format_value(&self, value: f64) -> String {
        let text = format!("{:.*}", self.digits as usize, value);
        match self.language.decimal_mark() {
            '.' => text,
            mark => text.replace('.', &mark.to_string()),
        }
    }

    /// Missing values print as `NA` (English) or `ND` (French).
    pub fn format_optional(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => self.format_value(v),
            None => self.missing_label().to_string(),
        }
    }

    /// `[lo, hi]` in English; `[lo ; hi]` in French, where the comma is taken.
    pub fn format_range(&self, lower: Option<f64>, upper: Option<f64>) -> String {
        let sep = match self.language {
            Language::English => ", ",
            Language::French => " ; ",
        };
        format!(
            "[{}{}{}]",
            self.format_optional(lower),
            sep,
            self.format_optional(upper)
        )
    }

    /// `point [lo, hi]`.
    pub fn format_point_range(&self, point: f64, lower: Option<f64>, upper: Option<f64>) -> String {
        format!(
            "{} {}",
            self.format_value(point),
            self.format_range(lower, upper)
        )
    }

    fn missing_label(&self) -> &'static str {
        match self.language {
            Language::English => "NA",
            Language::French => "ND",
        }
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(Language::English, DEFAULT_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_formatting() {
        let f = ValueFormatter::default();
        assert_eq!(f.format_value(0.525), "0.53");
        assert_eq!(f.format_range(Some(0.2), None), "[0.20, NA]");
    }

    #[test]
    fn test_french_decimal_comma() {
        let f = ValueFormatter::new(Language::French, 2);
        assert_eq!(f.format_value(0.75), "0,75");
        assert_eq!(f.format_range(Some(0.5), Some(0.9)), "[0,50 ; 0,90]");
        assert_eq!(f.format_optional(None), "ND");
        assert_eq!(
            f.format_point_range(0.7, Some(0.5), None),
            "0,70 [0,50 ; ND]"
        );
    }

    #[test]
    fn test_digits_from_config() {
        let config = LocaleConfig {
            language: None,
            digits: Some(0),
        };
        assert_eq!(ValueFormatter::from_config(&config).format_value(0.6), "1");
    }
}
