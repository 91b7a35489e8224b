use serde::{Deserialize, Serialize};

use crate::constants::PIVOT_CURRENCY;

/// Display preferences. The dashboard renders all monetary values in
/// `display_currency`, converting from each instrument's trading currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub display_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: PIVOT_CURRENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inr_display() {
        assert_eq!(Settings::default().display_currency, "INR");
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(json, r#"{"displayCurrency":"INR"}"#);
    }
}
