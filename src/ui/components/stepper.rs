//! Stepper component
//!
//! A labeled value with minus/plus buttons, used for the sleep-duration and
//! coffee-intake inputs. The component only reports which button was
//! pressed; clamping lives in the state setters.

use crate::ui::theme::Theme;
use egui::{Button, RichText, Vec2, WidgetInfo, WidgetType};

/// Which stepper button was pressed this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct StepperResponse {
    pub decremented: bool,
    pub incremented: bool,
}

/// Labeled minus/plus stepper
pub struct Stepper<'a> {
    value_label: String,
    control_name: &'a str,
    theme: &'a Theme,
    enabled: bool,
}

impl<'a> Stepper<'a> {
    /// Create a stepper showing `value_label`, with accessibility labels
    /// derived from `control_name` ("Increase {control_name}" etc.)
    pub fn new(value_label: impl Into<String>, control_name: &'a str, theme: &'a Theme) -> Self {
        Self {
            value_label: value_label.into(),
            control_name,
            theme,
            enabled: true,
        }
    }

    /// Enable or disable both buttons
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the stepper and report button presses
    pub fn show(self, ui: &mut egui::Ui) -> StepperResponse {
        let mut response = StepperResponse::default();
        let button_size = Vec2::new(28.0, 28.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&self.value_label)
                    .size(15.0)
                    .color(self.theme.text_secondary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let plus = ui.add_enabled(
                    self.enabled,
                    Button::new(RichText::new("+").size(16.0)).min_size(button_size),
                );
                plus.widget_info(|| {
                    WidgetInfo::labeled(
                        WidgetType::Button,
                        self.enabled,
                        format!("Increase {}", self.control_name),
                    )
                });
                if plus.clicked() {
                    response.incremented = true;
                }

                let minus = ui.add_enabled(
                    self.enabled,
                    Button::new(RichText::new("\u{2212}").size(16.0)).min_size(button_size),
                );
                minus.widget_info(|| {
                    WidgetInfo::labeled(
                        WidgetType::Button,
                        self.enabled,
                        format!("Decrease {}", self.control_name),
                    )
                });
                if minus.clicked() {
                    response.decremented = true;
                }
            });
        });

        response
    }
}
