//! Yes/no indicators.

use super::keywords::HAZARDOUS;
use super::locator::find_line_value;
use super::patterns::{FLAG_NO, FLAG_YES};
use super::FieldExtractor;

/// Hazardous material indicator. Absent or unreadable values mean "No".
#[derive(Debug, Clone, Default)]
pub struct HazardFlagExtractor;

impl HazardFlagExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for HazardFlagExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let value = find_line_value(text, HAZARDOUS)?;
        if FLAG_YES.is_match(&value) {
            Some("Yes".to_string())
        } else if FLAG_NO.is_match(&value) {
            Some("No".to_string())
        } else {
            None
        }
    }
}

/// Hazardous material indicator as `Yes` or `No`.
pub fn extract_hazard_flag(text: &str) -> String {
    HazardFlagExtractor::new()
        .extract(text)
        .unwrap_or_else(|| "No".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_flag() {
        assert_eq!(extract_hazard_flag("Hazardous Material: YES"), "Yes");
        assert_eq!(extract_hazard_flag("HazMat: Y"), "Yes");
        assert_eq!(extract_hazard_flag("Hazardous Material Indicator: N"), "No");
        assert_eq!(extract_hazard_flag("nothing declared"), "No");
    }
}
