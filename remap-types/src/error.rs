use crate::kind::KeycodeCompositionKind;

/// A composition was requested for a code outside its range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("keycode {code:#06X} is not a {expected} composition")]
pub struct InvalidVariantError {
    pub code: u16,
    pub expected: KeycodeCompositionKind,
    /// What the code actually is, `None` for unassigned codes
    pub actual: Option<KeycodeCompositionKind>,
}

impl InvalidVariantError {
    pub const fn new(code: u16, expected: KeycodeCompositionKind) -> Self {
        Self {
            code,
            expected,
            actual: KeycodeCompositionKind::classify(code),
        }
    }
}
