use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use serde_json::{Map, Value};

use crate::{
    config::{FieldConfig, InputKind},
    field::{EventOutcome, EventTarget, FieldEvent, FloatField},
    presentation,
    terminal::TerminalGuard,
};

const HELP_TEXT: &str = "Tab/Shift+Tab move • click a label to focus its field • Ctrl+Q quit";

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Focus the first field as soon as the loop starts.
    pub autofocus: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            autofocus: false,
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }
}

/// Demo driver: runs a stack of floating-label fields in the terminal and
/// returns the final values as a JSON object keyed by field name.
#[derive(Debug)]
pub struct FloatInputUi {
    configs: Vec<FieldConfig>,
    title: Option<String>,
    options: UiOptions,
}

impl FloatInputUi {
    pub fn new(configs: impl IntoIterator<Item = FieldConfig>) -> Self {
        Self {
            configs: configs.into_iter().collect(),
            title: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<Value> {
        let FloatInputUi {
            configs,
            title,
            options,
        } = self;
        let fields = configs.into_iter().map(FloatField::new).collect();
        let mut app = App::new(fields, title, options);
        app.run()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyCommand {
    Quit,
    NextField,
    PrevField,
    Blur,
    Edit(KeyEvent),
    None,
}

fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') | KeyCode::Char('C') => {
                KeyCommand::Quit
            }
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::Blur,
        _ => KeyCommand::Edit(*key),
    }
}

/// Applies one keystroke to the current raw value, or `None` when the key
/// does not edit. Number fields only accept numeric characters.
fn edited_value(kind: InputKind, current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            if kind == InputKind::Number && !(c.is_ascii_digit() || c == '.' || c == '-') {
                return None;
            }
            let mut next = current.to_string();
            next.push(c);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop();
            Some(next)
        }
        KeyCode::Delete => Some(String::new()),
        _ => None,
    }
}

struct App {
    fields: Vec<FloatField>,
    focused: Option<usize>,
    field_areas: Vec<Rect>,
    title: Option<String>,
    options: UiOptions,
    status_message: String,
    should_quit: bool,
}

impl App {
    fn new(fields: Vec<FloatField>, title: Option<String>, options: UiOptions) -> Self {
        let status_message = if options.show_help {
            HELP_TEXT.to_string()
        } else {
            "Ready.".to_string()
        };
        Self {
            fields,
            focused: None,
            field_areas: Vec::new(),
            title,
            options,
            status_message,
            should_quit: false,
        }
    }

    fn run(&mut self) -> Result<Value> {
        let mut terminal = TerminalGuard::new()?;
        if self.options.autofocus && !self.fields.is_empty() {
            self.focus_field(0);
        }
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate).context("failed to poll terminal events")? {
                continue;
            }
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::FocusLost => self.blur_focused(),
                Event::Resize(_, _) | Event::FocusGained | Event::Paste(_) => {}
            }
        }
        self.blur_focused();

        let mut values = Map::new();
        for field in &self.fields {
            values.insert(
                field.name().to_string(),
                Value::String(field.value().to_string()),
            );
        }
        Ok(Value::Object(values))
    }

    fn draw(&mut self, frame: &mut Frame<'_>) {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(4)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        if let Some(title) = &self.title {
            let heading =
                Paragraph::new(title.clone()).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(heading, chunks[0]);
        }

        self.field_areas.clear();
        for (idx, field) in self.fields.iter().enumerate() {
            let area = chunks[idx + 1];
            let boxed = Rect {
                height: area.height.min(3),
                ..area
            };
            presentation::render_field(frame, boxed, field);
            self.field_areas.push(boxed);
        }

        let status = Paragraph::new(self.status_message.clone());
        frame.render_widget(status, chunks[self.fields.len() + 2]);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify(&key) {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::NextField => self.focus_relative(1),
            KeyCommand::PrevField => self.focus_relative(-1),
            KeyCommand::Blur => self.blur_focused(),
            KeyCommand::Edit(key) => self.edit(&key),
            KeyCommand::None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let Some(idx) = self
            .field_areas
            .iter()
            .position(|area| area.contains(position))
        else {
            return;
        };
        let target = if mouse.row == self.label_row(idx) {
            EventTarget::Label
        } else {
            EventTarget::Field
        };
        self.click(idx, target);
    }

    /// The terminal row the label currently occupies: the strip above the
    /// input line while floating, the input line itself while resting.
    fn label_row(&self, idx: usize) -> u16 {
        let area = self.field_areas[idx];
        if self.fields[idx].is_floating() {
            area.y
        } else {
            area.y.saturating_add(1)
        }
    }

    fn click(&mut self, idx: usize, target: EventTarget) {
        match target {
            EventTarget::Label => {
                let event = FieldEvent::Select {
                    name: self.fields[idx].name().to_string(),
                    target: EventTarget::Label,
                };
                // The label never takes focus itself; it asks for the field
                // to be focused and the field's own select event does the rest.
                if self.fields[idx].handle_event(event) == EventOutcome::RedirectFocus {
                    self.focus_field(idx);
                }
            }
            EventTarget::Field => self.focus_field(idx),
        }
    }

    fn focus_relative(&mut self, delta: i32) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len() as i32;
        let next = match self.focused {
            Some(idx) => (((idx as i32 + delta) % len) + len) % len,
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.focus_field(next as usize);
    }

    fn focus_field(&mut self, idx: usize) {
        if self.focused == Some(idx) || idx >= self.fields.len() {
            return;
        }
        self.blur_focused();
        let event = FieldEvent::Select {
            name: self.fields[idx].name().to_string(),
            target: EventTarget::Field,
        };
        let _ = self.fields[idx].handle_event(event);
        self.focused = Some(idx);
        let config = self.fields[idx].config();
        let label = if config.placeholder.is_empty() {
            &config.name
        } else {
            &config.placeholder
        };
        self.status_message = format!("Editing {label}");
    }

    fn blur_focused(&mut self) {
        if let Some(idx) = self.focused.take() {
            let event = FieldEvent::Deselect {
                name: self.fields[idx].name().to_string(),
                value: None,
            };
            let _ = self.fields[idx].handle_event(event);
        }
    }

    fn edit(&mut self, key: &KeyEvent) {
        let Some(idx) = self.focused else {
            return;
        };
        let field = &mut self.fields[idx];
        let Some(next) = edited_value(field.config().kind, field.value(), key) else {
            return;
        };
        let event = FieldEvent::Change {
            name: field.name().to_string(),
            value: Some(next),
        };
        let _ = field.handle_event(event);
    }
}
