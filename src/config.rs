use std::fmt;

use ratatui::style::Color;
use serde::Deserialize;

/// Parent notification callback: receives the field name and the raw value.
pub type NotifyHandler = Box<dyn FnMut(&str, &str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Password,
    Email,
}

/// Construction-time configuration for a single floating-label field.
///
/// The data portion deserializes from JSON so field definitions can be loaded
/// from configuration files; the notification handlers are attached through
/// the builder methods and are never serialized.
#[derive(Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Identifier echoed back on every notification.
    pub name: String,
    /// Value the field starts with; edits back to it are not reported.
    pub initial_value: String,
    /// Text shown by the label in both positions.
    pub placeholder: String,
    pub kind: InputKind,
    /// Input text color.
    pub color: Color,
    /// Label color while floating.
    pub primary_color: Color,
    /// Label color while resting over the empty field.
    pub secondary_color: Color,
    /// Base font size in em units.
    pub font_size: f32,
    /// Fraction of `font_size` the label shrinks to while floating (0..=1).
    pub shrink_amount: f32,
    /// Vertical field padding in em units.
    pub padding: f32,
    /// Vertical label offset in em units while floating.
    pub float_top_offset: f32,
    /// Horizontal label inset while resting, as a fraction of field width.
    pub rest_inset: f32,
    #[serde(skip)]
    pub(crate) on_change: Option<NotifyHandler>,
    #[serde(skip)]
    pub(crate) on_complete: Option<NotifyHandler>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            initial_value: String::new(),
            placeholder: String::new(),
            kind: InputKind::Text,
            color: Color::Rgb(0x42, 0x42, 0x42),
            primary_color: Color::Rgb(0xF1, 0x77, 0x3B),
            secondary_color: Color::DarkGray,
            font_size: 1.0,
            shrink_amount: 0.8,
            padding: 0.6160335,
            float_top_offset: 0.60625,
            rest_inset: 0.02,
            on_change: None,
            on_complete: None,
        }
    }
}

impl FieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_label_colors(mut self, primary: Color, secondary: Color) -> Self {
        self.primary_color = primary;
        self.secondary_color = secondary;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_shrink_amount(mut self, shrink_amount: f32) -> Self {
        self.shrink_amount = shrink_amount;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_float_top_offset(mut self, offset: f32) -> Self {
        self.float_top_offset = offset;
        self
    }

    pub fn with_rest_inset(mut self, inset: f32) -> Self {
        self.rest_inset = inset;
        self
    }

    /// Notify on every keystroke that commits a value (non-empty and
    /// different from `initial_value`).
    pub fn on_change(mut self, handler: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Notify once when focus is lost with a committed value.
    pub fn on_complete(mut self, handler: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("name", &self.name)
            .field("initial_value", &self.initial_value)
            .field("placeholder", &self.placeholder)
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("primary_color", &self.primary_color)
            .field("secondary_color", &self.secondary_color)
            .field("font_size", &self.font_size)
            .field("shrink_amount", &self.shrink_amount)
            .field("padding", &self.padding)
            .field("float_top_offset", &self.float_top_offset)
            .field("rest_inset", &self.rest_inset)
            .field("on_change", &self.on_change.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_metrics() {
        let config = FieldConfig::default();
        assert_eq!(config.kind, InputKind::Text);
        assert_eq!(config.font_size, 1.0);
        assert_eq!(config.shrink_amount, 0.8);
        assert_eq!(config.padding, 0.6160335);
        assert_eq!(config.float_top_offset, 0.60625);
        assert_eq!(config.rest_inset, 0.02);
        assert_eq!(config.primary_color, Color::Rgb(0xF1, 0x77, 0x3B));
    }

    #[test]
    fn deserializes_from_json() {
        let config: FieldConfig = serde_json::from_value(serde_json::json!({
            "name": "email",
            "placeholder": "Email address",
            "kind": "email",
            "primary_color": "#F1773B",
            "shrink_amount": 0.75
        }))
        .expect("config should deserialize");
        assert_eq!(config.name, "email");
        assert_eq!(config.kind, InputKind::Email);
        assert_eq!(config.primary_color, Color::Rgb(0xF1, 0x77, 0x3B));
        assert_eq!(config.shrink_amount, 0.75);
        // Unspecified fields keep their defaults; handlers never deserialize.
        assert_eq!(config.padding, 0.6160335);
        assert!(config.on_change.is_none());
    }

    #[test]
    fn builder_attaches_handlers() {
        let config = FieldConfig::new("username")
            .with_initial_value("guest")
            .on_change(|_, _| {})
            .on_complete(|_, _| {});
        assert_eq!(config.name, "username");
        assert_eq!(config.initial_value, "guest");
        assert!(config.on_change.is_some());
        assert!(config.on_complete.is_some());
    }
}
