/// Which of the two child elements an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Field,
    Label,
}

/// Inbound events the controller consumes from the host runtime. Each carries
/// the field's name; events for another field are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Focus gained, or the label was clicked.
    Select { name: String, target: EventTarget },
    /// Focus lost. Hosts that cannot report a value on blur pass `None` and
    /// the controller keeps its current value.
    Deselect { name: String, value: Option<String> },
    /// A keystroke produced a new raw value. A missing value is treated as
    /// the empty string.
    Change { name: String, value: Option<String> },
}

impl FieldEvent {
    pub fn name(&self) -> &str {
        match self {
            FieldEvent::Select { name, .. }
            | FieldEvent::Deselect { name, .. }
            | FieldEvent::Change { name, .. } => name,
        }
    }
}

/// What the controller did with an event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    /// The event was not addressed to this field, or carried nothing to do.
    Ignored,
    /// A label click: the host should move keyboard focus to the field and
    /// deliver the field's own select event.
    RedirectFocus,
}
