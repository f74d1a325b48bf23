#![deny(rust_2018_idioms)]

mod config;
mod field;
mod presentation;
mod runtime;
mod style;
mod terminal;

pub use config::{FieldConfig, InputKind, NotifyHandler};
pub use field::{EventOutcome, EventTarget, FieldEvent, FieldState, FloatField, FloatPhase};
pub use presentation::render_field;
pub use runtime::{FloatInputUi, UiOptions};
pub use style::{CursorKind, FieldStyle, LabelStyle, field_style, label_style};

pub mod prelude {
    pub use super::{FieldConfig, FieldEvent, FloatField, FloatInputUi, InputKind, UiOptions};
}
