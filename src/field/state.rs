use crate::{
    config::FieldConfig,
    style::{self, FieldStyle, LabelStyle},
};

use super::events::{EventOutcome, EventTarget, FieldEvent};

/// Where the label sits, derived purely from focus and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPhase {
    /// Unfocused and empty: the label overlaps the field as a placeholder.
    Resting,
    /// The field has input focus: the label floats.
    Focused,
    /// Unfocused but non-empty: the label keeps floating.
    Filled,
}

impl FloatPhase {
    pub fn derive(has_focus: bool, value: &str) -> Self {
        if has_focus {
            FloatPhase::Focused
        } else if value.is_empty() {
            FloatPhase::Resting
        } else {
            FloatPhase::Filled
        }
    }

    pub fn is_floating(self) -> bool {
        !matches!(self, FloatPhase::Resting)
    }
}

/// Transient per-instance state. The floating phase is never stored; it is
/// recomputed from these two fields so it cannot drift out of agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    current_value: String,
    has_focus: bool,
}

impl FieldState {
    fn new(initial_value: &str) -> Self {
        Self {
            current_value: initial_value.to_string(),
            has_focus: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.current_value
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn phase(&self) -> FloatPhase {
        FloatPhase::derive(self.has_focus, &self.current_value)
    }
}

/// Controller for one floating-label field: owns the configuration and the
/// state, applies inbound events, and notifies the parent through the
/// configured handlers.
#[derive(Debug)]
pub struct FloatField {
    config: FieldConfig,
    state: FieldState,
}

impl FloatField {
    pub fn new(config: FieldConfig) -> Self {
        let state = FieldState::new(&config.initial_value);
        Self { config, state }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn phase(&self) -> FloatPhase {
        self.state.phase()
    }

    pub fn is_floating(&self) -> bool {
        self.phase().is_floating()
    }

    pub fn label_style(&self) -> LabelStyle {
        style::label_style(self.is_floating(), &self.config)
    }

    pub fn field_style(&self) -> FieldStyle {
        style::field_style(&self.config)
    }

    /// Applies one inbound event. Events addressed to another field are
    /// ignored: no visual change, no notification.
    pub fn handle_event(&mut self, event: FieldEvent) -> EventOutcome {
        if event.name() != self.config.name {
            return EventOutcome::Ignored;
        }
        match event {
            FieldEvent::Select { target, .. } => self.apply_select(target),
            FieldEvent::Deselect { value, .. } => self.apply_deselect(value),
            FieldEvent::Change { value, .. } => self.apply_change(value),
        }
    }

    /// A label click is a proxy for field focus, never a state change of its
    /// own; the field's subsequent select event drives the transition.
    fn apply_select(&mut self, target: EventTarget) -> EventOutcome {
        match target {
            EventTarget::Label => EventOutcome::RedirectFocus,
            EventTarget::Field => {
                self.state.has_focus = true;
                EventOutcome::Handled
            }
        }
    }

    fn apply_deselect(&mut self, value: Option<String>) -> EventOutcome {
        if let Some(value) = value {
            self.state.current_value = value;
        }
        self.state.has_focus = false;
        if self.commits(&self.state.current_value) {
            let FieldConfig {
                name, on_complete, ..
            } = &mut self.config;
            if let Some(handler) = on_complete {
                handler(name, &self.state.current_value);
            }
        }
        EventOutcome::Handled
    }

    fn apply_change(&mut self, value: Option<String>) -> EventOutcome {
        let value = value.unwrap_or_default();
        let commits = self.commits(&value);
        self.state.current_value = value;
        if commits {
            let FieldConfig {
                name, on_change, ..
            } = &mut self.config;
            if let Some(handler) = on_change {
                handler(name, &self.state.current_value);
            }
        }
        EventOutcome::Handled
    }

    /// A value is a commit when it is non-empty and differs from the
    /// configured initial value; a round trip back to the original is a no-op.
    fn commits(&self, value: &str) -> bool {
        !value.is_empty() && value != self.config.initial_value
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    type Log = Rc<RefCell<Vec<(String, String)>>>;

    fn recorded(log: &Log) -> impl FnMut(&str, &str) + 'static {
        let log = Rc::clone(log);
        move |name: &str, value: &str| {
            log.borrow_mut().push((name.to_string(), value.to_string()));
        }
    }

    fn select(name: &str, target: EventTarget) -> FieldEvent {
        FieldEvent::Select {
            name: name.to_string(),
            target,
        }
    }

    fn change(name: &str, value: &str) -> FieldEvent {
        FieldEvent::Change {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    fn deselect(name: &str, value: &str) -> FieldEvent {
        FieldEvent::Deselect {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn phase_is_a_pure_function_of_focus_and_value() {
        assert_eq!(FloatPhase::derive(false, ""), FloatPhase::Resting);
        assert_eq!(FloatPhase::derive(false, "x"), FloatPhase::Filled);
        assert_eq!(FloatPhase::derive(true, ""), FloatPhase::Focused);
        assert_eq!(FloatPhase::derive(true, "x"), FloatPhase::Focused);
        assert!(!FloatPhase::Resting.is_floating());
        assert!(FloatPhase::Focused.is_floating());
        assert!(FloatPhase::Filled.is_floating());
    }

    #[test]
    fn typing_then_blurring_notifies_once_each() {
        // Scenario A: empty field, type "a", blur.
        let changes: Log = Rc::default();
        let completions: Log = Rc::default();
        let mut field = FloatField::new(
            FieldConfig::new("field")
                .on_change(recorded(&changes))
                .on_complete(recorded(&completions)),
        );

        assert_eq!(
            field.handle_event(select("field", EventTarget::Field)),
            EventOutcome::Handled
        );
        assert_eq!(field.phase(), FloatPhase::Focused);

        assert_eq!(field.handle_event(change("field", "a")), EventOutcome::Handled);
        assert_eq!(field.value(), "a");
        assert_eq!(
            *changes.borrow(),
            vec![("field".to_string(), "a".to_string())]
        );

        assert_eq!(field.handle_event(deselect("field", "a")), EventOutcome::Handled);
        assert_eq!(field.phase(), FloatPhase::Filled);
        assert_eq!(
            *completions.borrow(),
            vec![("field".to_string(), "a".to_string())]
        );
    }

    #[test]
    fn focus_round_trip_without_typing_is_silent() {
        // Scenario B: initial "x", focus, blur.
        let changes: Log = Rc::default();
        let completions: Log = Rc::default();
        let mut field = FloatField::new(
            FieldConfig::new("field")
                .with_initial_value("x")
                .on_change(recorded(&changes))
                .on_complete(recorded(&completions)),
        );

        assert_eq!(field.phase(), FloatPhase::Filled);
        let _ = field.handle_event(select("field", EventTarget::Field));
        let _ = field.handle_event(deselect("field", "x"));
        assert_eq!(field.phase(), FloatPhase::Filled);
        assert!(changes.borrow().is_empty());
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn clearing_to_empty_rests_without_completion() {
        // Scenario C: initial "x", clear, blur.
        let completions: Log = Rc::default();
        let mut field = FloatField::new(
            FieldConfig::new("field")
                .with_initial_value("x")
                .on_complete(recorded(&completions)),
        );

        let _ = field.handle_event(select("field", EventTarget::Field));
        let _ = field.handle_event(change("field", ""));
        assert_eq!(field.value(), "");
        let _ = field.handle_event(deselect("field", ""));
        assert_eq!(field.phase(), FloatPhase::Resting);
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn label_click_redirects_without_transition() {
        // Scenario D: the click itself changes nothing; the field's own
        // select event drives the transition.
        let mut field = FloatField::new(FieldConfig::new("field"));
        assert_eq!(
            field.handle_event(select("field", EventTarget::Label)),
            EventOutcome::RedirectFocus
        );
        assert_eq!(field.phase(), FloatPhase::Resting);
        assert!(!field.state().has_focus());

        assert_eq!(
            field.handle_event(select("field", EventTarget::Field)),
            EventOutcome::Handled
        );
        assert_eq!(field.phase(), FloatPhase::Focused);
    }

    #[test]
    fn change_updates_value_even_when_not_notifying() {
        let changes: Log = Rc::default();
        let mut field = FloatField::new(
            FieldConfig::new("field")
                .with_initial_value("x")
                .on_change(recorded(&changes)),
        );

        let _ = field.handle_event(change("field", "xy"));
        assert_eq!(field.value(), "xy");
        // Editing back to the original value updates locally but is not a
        // commit.
        let _ = field.handle_event(change("field", "x"));
        assert_eq!(field.value(), "x");
        let _ = field.handle_event(change("field", ""));
        assert_eq!(field.value(), "");
        assert_eq!(
            *changes.borrow(),
            vec![("field".to_string(), "xy".to_string())]
        );
    }

    #[test]
    fn missing_payload_is_the_empty_string() {
        let mut field = FloatField::new(FieldConfig::new("field").with_initial_value("x"));
        let _ = field.handle_event(FieldEvent::Change {
            name: "field".to_string(),
            value: None,
        });
        assert_eq!(field.value(), "");
    }

    #[test]
    fn deselect_without_payload_keeps_current_value() {
        let completions: Log = Rc::default();
        let mut field =
            FloatField::new(FieldConfig::new("field").on_complete(recorded(&completions)));
        let _ = field.handle_event(select("field", EventTarget::Field));
        let _ = field.handle_event(change("field", "kept"));
        let _ = field.handle_event(FieldEvent::Deselect {
            name: "field".to_string(),
            value: None,
        });
        assert_eq!(field.value(), "kept");
        assert_eq!(field.phase(), FloatPhase::Filled);
        assert_eq!(
            *completions.borrow(),
            vec![("field".to_string(), "kept".to_string())]
        );
    }

    #[test]
    fn events_for_another_field_are_ignored() {
        let changes: Log = Rc::default();
        let mut field = FloatField::new(FieldConfig::new("field").on_change(recorded(&changes)));
        assert_eq!(
            field.handle_event(select("other", EventTarget::Field)),
            EventOutcome::Ignored
        );
        assert_eq!(field.handle_event(change("other", "zz")), EventOutcome::Ignored);
        assert_eq!(field.value(), "");
        assert_eq!(field.phase(), FloatPhase::Resting);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn repeated_select_is_idempotent() {
        let mut field = FloatField::new(FieldConfig::new("field"));
        let _ = field.handle_event(select("field", EventTarget::Field));
        let _ = field.handle_event(select("field", EventTarget::Field));
        assert_eq!(field.phase(), FloatPhase::Focused);
    }

    #[test]
    fn absent_handlers_mean_no_notification() {
        let mut field = FloatField::new(FieldConfig::new("field"));
        let _ = field.handle_event(change("field", "abc"));
        let _ = field.handle_event(deselect("field", "abc"));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.phase(), FloatPhase::Filled);
    }
}
