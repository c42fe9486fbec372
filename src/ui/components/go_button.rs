//! GO button component
//!
//! The single action control. A circular gold button that shrinks away as
//! the result panel reveals and shows a spinner while a prediction is in
//! flight.

use crate::ui::theme::Theme;
use egui::{Color32, FontFamily, FontId, Rect, Sense, Vec2, WidgetInfo, WidgetType};

const BUTTON_DIAMETER: f32 = 96.0;

/// Circular "GO" action button
pub struct GoButton<'a> {
    theme: &'a Theme,
    computing: bool,
    /// Reveal progress of the result panel, 0.0 (hidden) to 1.0 (shown)
    reveal: f32,
}

impl<'a> GoButton<'a> {
    pub fn new(theme: &'a Theme, computing: bool, reveal: f32) -> Self {
        Self {
            theme,
            computing,
            reveal,
        }
    }

    /// Show the button; returns true when it was activated
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let size = Vec2::splat(BUTTON_DIAMETER);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let enabled = !self.computing && self.reveal < 0.5;
        response.widget_info(|| {
            WidgetInfo::labeled(WidgetType::Button, enabled, "Compute bedtime")
        });

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response);
        }

        enabled && response.clicked()
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let center = rect.center();

        // Shrink and fade as the result takes over the screen
        let scale = 1.0 - self.reveal;
        if scale <= f32::EPSILON {
            return;
        }
        let radius = (BUTTON_DIAMETER / 2.0) * scale;

        let fill = if self.computing {
            self.theme.action_fill.gamma_multiply(0.6)
        } else if response.hovered() {
            self.theme.action_fill.gamma_multiply(1.1)
        } else {
            self.theme.action_fill
        };

        painter.circle_filled(center, radius, fill.gamma_multiply(scale));

        if response.hovered() && !self.computing {
            painter.circle_stroke(
                center,
                radius + 2.0,
                egui::Stroke::new(2.0, self.theme.action_fill.gamma_multiply(0.5 * scale)),
            );
        }

        if self.computing {
            self.draw_spinner(ui, painter, center, scale);
        } else {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "GO",
                FontId::new(22.0 * scale, FontFamily::Proportional),
                self.theme.action_text.gamma_multiply(scale),
            );
        }
    }

    /// Draw rotating dots while inference is in flight
    fn draw_spinner(&self, ui: &egui::Ui, painter: &egui::Painter, center: egui::Pos2, scale: f32) {
        let t = ui.ctx().input(|i| i.time);
        let angle = t * 3.0;

        for i in 0..3 {
            let dot_angle = angle + (i as f64 * std::f64::consts::TAU / 3.0);
            let orbit = 10.0 * scale;
            let dot_pos = egui::pos2(
                center.x + (dot_angle.cos() as f32 * orbit),
                center.y + (dot_angle.sin() as f32 * orbit),
            );

            let alpha = 1.0 - (i as f32 * 0.3);
            let color = Color32::from_black_alpha((200.0 * alpha * scale) as u8);
            painter.circle_filled(dot_pos, 3.0 * scale, color);
        }

        ui.ctx().request_repaint();
    }
}
