use serde::Deserialize;

use crate::error::EffectsError;

/// Timing constants and variant switches for the page effects.
///
/// Keys are camelCase so a page can hand over the same object it would
/// write in a `<script>` tag. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    /// Total length of one hover scramble run.
    pub scramble_duration_ms: u32,
    /// Marker class added to the nav once the header is scrolled past.
    pub nav_scrolled_class: Option<String>,
    pub contact_email: String,
    pub toast_visible_ms: u32,
    pub snap_debounce_ms: u32,
    pub card_stagger_ms: u32,
    /// Wait before the first horizontal line, matches the vertical line's CSS transition.
    pub line_delay_ms: u32,
    pub line_stagger_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            scramble_duration_ms: 800,
            nav_scrolled_class: Some("scrolled".to_string()),
            contact_email: "hello@kinotekina.com".to_string(),
            toast_visible_ms: 1200,
            snap_debounce_ms: 100,
            card_stagger_ms: 150,
            line_delay_ms: 800,
            line_stagger_ms: 200,
        }
    }
}

impl EffectsConfig {
    /// The stripped-down page variant: faster scramble, no nav marker class.
    pub fn minimal() -> Self {
        Self {
            scramble_duration_ms: 400,
            nav_scrolled_class: None,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, EffectsError> {
        Ok(serde_json::from_str(raw)?)
    }
}
