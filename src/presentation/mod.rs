use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    config::InputKind,
    field::FloatField,
    style::LabelStyle,
};

const UNDERLINE_COLOR: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

/// Renders one field into `area`: a one-row label strip, the input line, and
/// its underline. Terminal cells cannot scale glyphs, so the derived label
/// font size shows up as the row shift between the strip and the input line;
/// colors and insets come straight from the derived styles.
pub fn render_field(frame: &mut Frame<'_>, area: Rect, field: &FloatField) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let strip_rows = u16::from(area.height >= 3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(strip_rows), Constraint::Min(1)])
        .split(area);
    let label = field.label_style();
    let input_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(UNDERLINE_COLOR));
    let inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    if field.is_floating() {
        frame.render_widget(Paragraph::new(label_line(field)), chunks[0]);
        frame.render_widget(Paragraph::new(value_line(field)), inner);
    } else {
        // Resting: the label overlaps the empty field at the configured inset.
        let inset = inset_columns(&label, inner.width);
        let overlap = Rect {
            x: inner.x.saturating_add(inset),
            width: inner.width.saturating_sub(inset),
            ..inner
        };
        frame.render_widget(Paragraph::new(label_line(field)), overlap);
    }

    if field.state().has_focus() {
        let cursor_x = inner
            .x
            .saturating_add(value_width(field))
            .min(inner.x.saturating_add(inner.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn label_line(field: &FloatField) -> Line<'static> {
    let style = field.label_style();
    Line::from(Span::styled(
        field.config().placeholder.clone(),
        Style::default().fg(style.color),
    ))
}

fn value_line(field: &FloatField) -> Line<'static> {
    let style = field.field_style();
    Line::from(Span::styled(
        display_value(field.config().kind, field.value()),
        Style::default().fg(style.color),
    ))
}

/// Password values render masked; every other kind renders verbatim.
fn display_value(kind: InputKind, value: &str) -> String {
    match kind {
        InputKind::Password => "\u{2022}".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

fn inset_columns(style: &LabelStyle, width: u16) -> u16 {
    (f32::from(width) * style.left_offset).round() as u16
}

fn value_width(field: &FloatField) -> u16 {
    display_value(field.config().kind, field.value()).width() as u16
}
