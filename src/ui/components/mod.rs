//! UI components for the Restwise screen

pub mod go_button;
pub mod result_panel;
pub mod stepper;
pub mod time_picker;

pub use go_button::GoButton;
pub use result_panel::ResultPanel;
pub use stepper::{Stepper, StepperResponse};
pub use time_picker::WakeTimePicker;
