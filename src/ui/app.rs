//! Main Restwise application struct and eframe integration

use crate::predictor::PredictorHandle;
use crate::ui::components::{GoButton, ResultPanel, Stepper, WakeTimePicker};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{CentralPanel, RichText};
use tracing::info;

/// Main Restwise application
pub struct RestwiseApp {
    /// Application state
    state: AppState,
    /// UI theme
    theme: Theme,
    /// Worker handle; kept alive for the life of the app
    _predictor: PredictorHandle,
}

impl RestwiseApp {
    /// Create a new Restwise application wired to a predictor worker
    pub fn new(cc: &eframe::CreationContext<'_>, predictor: PredictorHandle) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        let mut state = AppState::new();
        state.connect(&predictor);

        info!("Restwise UI initialized");

        Self {
            state,
            theme,
            _predictor: predictor,
        }
    }

    /// Render the three input controls; each edit routes through the state
    /// setters, which hide any visible result.
    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        let editable = !self.state.is_computing();

        let sleep = Stepper::new(self.state.inputs.sleep_label(), "sleep hours", &self.theme)
            .enabled(editable)
            .show(ui);
        if sleep.incremented {
            self.state.step_sleep_hours(1);
        }
        if sleep.decremented {
            self.state.step_sleep_hours(-1);
        }

        let coffee = Stepper::new(self.state.inputs.coffee_label(), "coffee cups", &self.theme)
            .enabled(editable)
            .show(ui);
        if coffee.incremented {
            self.state.step_coffee_cups(1);
        }
        if coffee.decremented {
            self.state.step_coffee_cups(-1);
        }

        let wake = WakeTimePicker::new(self.state.inputs.wake_time, &self.theme)
            .enabled(editable)
            .show(ui);
        if wake.hour_steps != 0 {
            self.state.step_wake_hour(wake.hour_steps);
        }
        if wake.minute_steps != 0 {
            self.state.step_wake_minute(wake.minute_steps);
        }
    }
}

impl eframe::App for RestwiseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply any finished predictions before rendering
        self.state.poll_events();

        // Keep repainting while inference is in flight so the reply is
        // picked up promptly
        if self.state.is_computing() {
            ctx.request_repaint();
        }

        // The reveal animation observes the display state
        let reveal = ctx.animate_bool(
            egui::Id::new("result_reveal"),
            self.state.display.result_visible,
        );

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);

                ui.label(
                    RichText::new("Restwise")
                        .size(32.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.label(
                    RichText::new("When should you go to bed?")
                        .size(14.0)
                        .color(self.theme.text_secondary),
                );

                ui.add_space(12.0);

                ResultPanel::new(&self.state, &self.theme, reveal).show(ui);

                ui.add_space(16.0);

                ui.scope(|ui| {
                    ui.set_max_width(300.0);
                    self.show_inputs(ui);
                });

                ui.add_space(20.0);

                if GoButton::new(&self.theme, self.state.is_computing(), reveal).show(ui) {
                    self.state.request_prediction();
                }

                // Keyboard shortcut (Enter to compute)
                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let any_widget_focused = ui.memory(|m| m.focused().is_some());
                if enter_pressed && !any_widget_focused && !self.state.is_computing() {
                    self.state.request_prediction();
                }

                ui.add_space(12.0);

                if let Some(error) = &self.state.last_error {
                    ui.label(RichText::new(error).size(13.0).color(self.theme.error));
                    ui.add_space(8.0);
                }

                let status_text = if self.state.is_computing() {
                    "Calculating your bedtime..."
                } else if self.state.display.result_visible {
                    "Adjust any input to start over"
                } else {
                    "Press Enter or GO to calculate"
                };
                ui.label(
                    RichText::new(status_text)
                        .size(12.0)
                        .color(self.theme.text_muted),
                );
            });
        });
    }
}
