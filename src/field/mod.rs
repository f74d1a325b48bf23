mod events;
mod state;

pub use events::{EventOutcome, EventTarget, FieldEvent};
pub use state::{FieldState, FloatField, FloatPhase};
