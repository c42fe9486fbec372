//! Wake-time picker component
//!
//! Hour and minute steppers for the wake-up time. Both wrap around their
//! range rather than saturating, because a time of day has no bounds.

use crate::ui::theme::Theme;
use chrono::{NaiveTime, Timelike};
use egui::{Button, RichText, Vec2, WidgetInfo, WidgetType};

/// Field adjustments reported by the picker
#[derive(Debug, Default, Clone, Copy)]
pub struct WakeTimeResponse {
    /// Hour delta (-1, 0 or +1)
    pub hour_steps: i32,
    /// Minute delta (-1, 0 or +1)
    pub minute_steps: i32,
}

/// Hour/minute picker for the wake-up time
pub struct WakeTimePicker<'a> {
    wake_time: NaiveTime,
    theme: &'a Theme,
    enabled: bool,
}

impl<'a> WakeTimePicker<'a> {
    pub fn new(wake_time: NaiveTime, theme: &'a Theme) -> Self {
        Self {
            wake_time,
            theme,
            enabled: true,
        }
    }

    /// Enable or disable all four buttons
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the picker and report field adjustments
    pub fn show(self, ui: &mut egui::Ui) -> WakeTimeResponse {
        let mut response = WakeTimeResponse::default();
        let button_size = Vec2::new(22.0, 22.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Wake-up time")
                    .size(15.0)
                    .color(self.theme.text_secondary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                response.minute_steps = self.field_steppers(
                    ui,
                    &format!("{:02}", self.wake_time.minute()),
                    "wake minute",
                    button_size,
                );

                ui.label(
                    RichText::new(":")
                        .size(15.0)
                        .color(self.theme.text_primary),
                );

                response.hour_steps = self.field_steppers(
                    ui,
                    &format!("{:02}", self.wake_time.hour()),
                    "wake hour",
                    button_size,
                );
            });
        });

        response
    }

    /// Render one value with its up/down buttons, returning the step delta
    fn field_steppers(
        &self,
        ui: &mut egui::Ui,
        value_text: &str,
        control_name: &str,
        button_size: Vec2,
    ) -> i32 {
        let mut steps = 0;

        // Right-to-left layout: plus, value, minus
        let plus = ui.add_enabled(
            self.enabled,
            Button::new(RichText::new("+").size(13.0)).min_size(button_size),
        );
        plus.widget_info(|| {
            WidgetInfo::labeled(
                WidgetType::Button,
                self.enabled,
                format!("Increase {}", control_name),
            )
        });
        if plus.clicked() {
            steps += 1;
        }

        ui.label(
            RichText::new(value_text)
                .size(15.0)
                .monospace()
                .color(self.theme.text_primary),
        );

        let minus = ui.add_enabled(
            self.enabled,
            Button::new(RichText::new("\u{2212}").size(13.0)).min_size(button_size),
        );
        minus.widget_info(|| {
            WidgetInfo::labeled(
                WidgetType::Button,
                self.enabled,
                format!("Decrease {}", control_name),
            )
        });
        if minus.clicked() {
            steps -= 1;
        }

        steps
    }
}
