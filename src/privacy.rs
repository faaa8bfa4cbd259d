//! Privacy mask over on-screen money.
//!
//! Amounts live in app state as centavos; the mask only decides whether a
//! card renders the formatted value or a placeholder. Toggling therefore
//! never loses the underlying amount.

use crate::money::format_brl;

/// `localStorage` key the mask preference persists under.
pub const STORAGE_KEY: &str = "saldoOculto";

/// What a masked amount renders as.
pub const PLACEHOLDER: &str = "----";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrivacyMask {
    hidden: bool,
}

impl PrivacyMask {
    /// Restores the preference from a stored value. Only the exact string
    /// `"true"` hides amounts; a missing or mangled value falls back to
    /// visible.
    pub fn from_stored(stored: Option<&str>) -> Self {
        Self {
            hidden: stored == Some("true"),
        }
    }

    pub fn is_hidden(self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            hidden: !self.hidden,
        }
    }

    /// Value to persist so the next visit restores this state.
    pub fn stored_value(self) -> &'static str {
        if self.hidden {
            "true"
        } else {
            "false"
        }
    }

    /// Renders `centavos` under the mask: formatted BRL when visible, the
    /// placeholder when hidden.
    pub fn amount(self, centavos: i64) -> String {
        if self.hidden {
            PLACEHOLDER.to_string()
        } else {
            format_brl(centavos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_true_string_hides() {
        assert!(PrivacyMask::from_stored(Some("true")).is_hidden());
        assert!(!PrivacyMask::from_stored(Some("false")).is_hidden());
        assert!(!PrivacyMask::from_stored(Some("TRUE")).is_hidden());
        assert!(!PrivacyMask::from_stored(Some("1")).is_hidden());
        assert!(!PrivacyMask::from_stored(None).is_hidden());
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let visible = PrivacyMask::from_stored(None);
        let hidden = visible.toggled();

        assert_eq!(hidden.stored_value(), "true");
        assert_eq!(visible.stored_value(), "false");
        assert_eq!(PrivacyMask::from_stored(Some(hidden.stored_value())), hidden);
        assert_eq!(hidden.toggled(), visible);
    }

    #[test]
    fn toggle_parity_matches_click_count() {
        let mut mask = PrivacyMask::default();
        for clicks in 1..=6 {
            mask = mask.toggled();
            assert_eq!(mask.is_hidden(), clicks % 2 == 1);
        }
    }

    #[test]
    fn masking_is_lossless() {
        let amount = 123_456;
        let visible = PrivacyMask::default();
        let hidden = visible.toggled();

        assert_eq!(hidden.amount(amount), PLACEHOLDER);
        // The amount is state, not DOM text, so unmasking recovers it exactly.
        assert_eq!(hidden.toggled().amount(amount), "R$ 1.234,56");
    }

    #[test]
    fn masks_every_amount_the_same_way() {
        let hidden = PrivacyMask::from_stored(Some("true"));
        assert_eq!(hidden.amount(0), PLACEHOLDER);
        assert_eq!(hidden.amount(-4_200), PLACEHOLDER);
        assert_eq!(hidden.amount(9_999_999), PLACEHOLDER);
    }
}
