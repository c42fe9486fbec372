//! Result panel component
//!
//! The purple disc showing the recommended bedtime, or the placeholder
//! glyph while nothing is visible. The panel slides up and fades in as the
//! reveal progress approaches 1.0; the animation observes the display
//! state, it never drives it.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{FontFamily, FontId, Rect, Sense, Vec2, WidgetInfo, WidgetType};

const PANEL_DIAMETER: f32 = 220.0;
const SLIDE_DISTANCE: f32 = 140.0;

/// Circular bedtime display
pub struct ResultPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    /// Reveal progress, 0.0 (hidden) to 1.0 (shown)
    reveal: f32,
}

impl<'a> ResultPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme, reveal: f32) -> Self {
        Self {
            state,
            theme,
            reveal,
        }
    }

    /// Show the panel
    pub fn show(self, ui: &mut egui::Ui) {
        let size = Vec2::new(PANEL_DIAMETER, PANEL_DIAMETER);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        let bedtime_text = self.state.bedtime_text();
        response.widget_info(|| {
            WidgetInfo::labeled(
                WidgetType::Label,
                true,
                format!("Bedtime result: {}", bedtime_text),
            )
        });

        if ui.is_rect_visible(rect) && self.reveal > 0.01 {
            self.paint(ui, rect, &bedtime_text);
        }
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, bedtime_text: &str) {
        let painter = ui.painter();
        let alpha = self.reveal;
        let center = rect.center() + Vec2::new(0.0, (1.0 - self.reveal) * SLIDE_DISTANCE);
        let radius = PANEL_DIAMETER / 2.0;

        // Concentric halo rings approximating the radial gradient
        painter.circle_filled(
            center,
            radius,
            self.theme.result_halo.gamma_multiply(0.25 * alpha),
        );
        painter.circle_filled(
            center,
            radius * 0.85,
            self.theme.result_halo.gamma_multiply(0.55 * alpha),
        );
        painter.circle_filled(
            center,
            radius * 0.65,
            self.theme.result_fill.gamma_multiply(alpha),
        );

        painter.text(
            center - Vec2::new(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            "Bedtime",
            FontId::new(20.0, FontFamily::Proportional),
            self.theme.text_primary.gamma_multiply(alpha),
        );
        painter.text(
            center + Vec2::new(0.0, 12.0),
            egui::Align2::CENTER_CENTER,
            bedtime_text,
            FontId::new(30.0, FontFamily::Proportional),
            self.theme.text_primary.gamma_multiply(alpha),
        );
    }
}
