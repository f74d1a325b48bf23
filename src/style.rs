use ratatui::style::Color;

use crate::config::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    /// Text-insertion cursor over the resting label, inviting a click.
    Text,
    /// Plain cursor once the label has floated out of the way.
    Default,
}

/// Visual parameters for the label, derived from the floating flag.
///
/// Geometry is expressed in em units relative to the field box; the
/// presentation layer quantizes it onto terminal rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub top_offset: f32,
    /// Fraction of the field width the label is inset from the left edge.
    pub left_offset: f32,
    pub color: Color,
    pub cursor: CursorKind,
}

/// Visual parameters for the field box. Independent of state: only the label
/// moves when it floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub font_size: f32,
    pub color: Color,
}

pub fn field_style(config: &FieldConfig) -> FieldStyle {
    FieldStyle {
        // Extra headroom at the top leaves space for the floated label.
        padding_top: config.padding + (config.font_size * config.shrink_amount) / 4.0,
        padding_bottom: config.padding,
        font_size: config.font_size,
        color: config.color,
    }
}

pub fn label_style(floating: bool, config: &FieldConfig) -> LabelStyle {
    let field = field_style(config);
    if floating {
        LabelStyle {
            font_size: config.font_size * config.shrink_amount,
            top_offset: config.float_top_offset,
            left_offset: 0.0,
            color: config.primary_color,
            cursor: CursorKind::Default,
        }
    } else {
        // Centers the label on the empty field's text baseline for any
        // configured font size, rather than assuming a fixed box height.
        LabelStyle {
            font_size: config.font_size,
            top_offset: config.font_size / 2.0 + field.padding_top + field.padding_bottom,
            left_offset: config.rest_inset,
            color: config.secondary_color,
            cursor: CursorKind::Text,
        }
    }
}
