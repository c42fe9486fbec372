//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests verify the screen behavior by simulating user interactions
//! and checking the accessibility tree for expected elements. A stub sleep
//! model stands in for the trained artifact so outcomes are deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use restwise::ui::{AppState, PLACEHOLDER_GLYPH};
use restwise::{PredictorHandle, RestwiseError, SleepFeatures, SleepModel};

/// Stub model returning a fixed wakefulness duration, counting invocations
struct FixedModel {
    awake_seconds: f64,
    calls: Arc<AtomicUsize>,
}

impl FixedModel {
    fn new(awake_seconds: f64) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                awake_seconds,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl SleepModel for FixedModel {
    fn predict(&self, _features: &SleepFeatures) -> restwise::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.awake_seconds)
    }

    fn name(&self) -> &str {
        "fixed-stub"
    }
}

/// Stub model that always fails
struct FailingModel;

impl SleepModel for FailingModel {
    fn predict(&self, _features: &SleepFeatures) -> restwise::Result<f64> {
        Err(RestwiseError::Prediction("stub failure".to_string()))
    }

    fn name(&self) -> &str {
        "failing-stub"
    }
}

/// Application state wrapper for testing
struct TestApp {
    state: AppState,
    // Worker thread stays alive with the app
    _predictor: PredictorHandle,
}

impl TestApp {
    fn new(model: Box<dyn SleepModel>) -> Self {
        let predictor = PredictorHandle::spawn(model);
        let mut state = AppState::new();
        state.connect(&predictor);
        Self {
            state,
            _predictor: predictor,
        }
    }
}

/// Render a simplified Restwise screen for testing, with the same
/// accessibility labels the real components carry.
fn render_screen(app: &mut TestApp, ui: &mut egui::Ui) {
    // Same cadence as the real app: apply finished predictions first
    app.state.poll_events();

    let bedtime_text = app.state.bedtime_text();
    let result_label = ui.label(&bedtime_text);
    result_label.widget_info(|| {
        egui::WidgetInfo::labeled(
            egui::WidgetType::Label,
            true,
            format!("Bedtime result: {}", bedtime_text),
        )
    });

    let editable = !app.state.is_computing();

    let stepper = |ui: &mut egui::Ui, text: &str, label: String| -> bool {
        let response = ui.add_enabled(editable, egui::Button::new(text));
        let enabled = editable;
        let info_label = label.clone();
        response.widget_info(move || {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, info_label.clone())
        });
        response.clicked()
    };

    if stepper(ui, "+", "Increase sleep hours".to_string()) {
        app.state.step_sleep_hours(1);
    }
    if stepper(ui, "\u{2212}", "Decrease sleep hours".to_string()) {
        app.state.step_sleep_hours(-1);
    }
    if stepper(ui, "+", "Increase coffee cups".to_string()) {
        app.state.step_coffee_cups(1);
    }
    if stepper(ui, "\u{2212}", "Decrease coffee cups".to_string()) {
        app.state.step_coffee_cups(-1);
    }
    if stepper(ui, "+", "Increase wake hour".to_string()) {
        app.state.step_wake_hour(1);
    }
    if stepper(ui, "+", "Increase wake minute".to_string()) {
        app.state.step_wake_minute(1);
    }

    let go = ui.add_enabled(editable, egui::Button::new("GO"));
    let go_enabled = editable;
    go.widget_info(move || {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, go_enabled, "Compute bedtime")
    });
    if go.clicked() {
        app.state.request_prediction();
    }

    if let Some(error) = &app.state.last_error {
        let error_text = error.clone();
        let response = ui.label(error);
        response.widget_info(move || {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Label,
                true,
                format!("Error banner: {}", error_text),
            )
        });
    }
}

fn build_harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(420.0, 640.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_screen(app, ui);
                });
            },
            app,
        )
}

/// Run frames until the in-flight prediction settles
fn run_until_settled(harness: &mut Harness<'static, TestApp>) {
    for _ in 0..200 {
        harness.run();
        if !harness.state().state.is_computing() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("prediction never settled");
}

#[test]
fn test_all_controls_exist() {
    let (model, _) = FixedModel::new(28800.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    let _ = harness.get_by_label("Increase sleep hours");
    let _ = harness.get_by_label("Decrease sleep hours");
    let _ = harness.get_by_label("Increase coffee cups");
    let _ = harness.get_by_label("Decrease coffee cups");
    let _ = harness.get_by_label("Increase wake hour");
    let _ = harness.get_by_label("Increase wake minute");
    let _ = harness.get_by_label("Compute bedtime");
}

#[test]
fn test_placeholder_shown_before_any_prediction() {
    let (model, _) = FixedModel::new(28800.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    let _ = harness.get_by_label(&format!("Bedtime result: {}", PLACEHOLDER_GLYPH));
}

#[test]
fn test_compute_reveals_bedtime() {
    // Defaults at 07:00 with an 8-hour prediction land on 23:00
    let (model, _) = FixedModel::new(28800.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    harness.get_by_label("Compute bedtime").click();
    harness.run();
    run_until_settled(&mut harness);
    harness.run();

    assert!(harness.state().state.display.result_visible);
    assert!(harness.state().state.display.has_prediction);
    let _ = harness.get_by_label("Bedtime result: 23:00");
}

#[test]
fn test_editing_input_hides_result_without_reinvoking_model() {
    let (model, calls) = FixedModel::new(28800.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    harness.get_by_label("Compute bedtime").click();
    harness.run();
    run_until_settled(&mut harness);
    harness.run();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Scenario B: bump coffee from 1 to 2 while the result is visible
    harness.get_by_label("Increase coffee cups").click();
    harness.run();

    let state = &harness.state().state;
    assert_eq!(state.inputs.coffee_cups, 2);
    assert!(!state.display.result_visible);
    assert!(state.display.has_prediction, "stale flag survives the edit");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "model must not run again");

    let _ = harness.get_by_label(&format!("Bedtime result: {}", PLACEHOLDER_GLYPH));
}

#[test]
fn test_failed_prediction_keeps_result_hidden() {
    let mut harness = build_harness(TestApp::new(Box::new(FailingModel)));
    harness.run();

    harness.get_by_label("Compute bedtime").click();
    harness.run();
    run_until_settled(&mut harness);
    harness.run();

    let state = &harness.state().state;
    assert!(!state.display.result_visible);
    assert!(!state.display.has_prediction);
    assert!(state.last_error.is_some());

    let _ = harness.get_by_label(&format!("Bedtime result: {}", PLACEHOLDER_GLYPH));
}

#[test]
fn test_sleep_stepper_saturates_at_upper_bound() {
    let (model, _) = FixedModel::new(28800.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    // 8.0 -> 12.0 takes 16 quarter steps; press a few extra
    for _ in 0..20 {
        harness.get_by_label("Increase sleep hours").click();
        harness.run();
    }

    assert_eq!(harness.state().state.inputs.sleep_hours, 12.0);
}

#[test]
fn test_recompute_with_same_inputs_is_idempotent() {
    let (model, calls) = FixedModel::new(27000.0);
    let mut harness = build_harness(TestApp::new(Box::new(model)));
    harness.run();

    harness.get_by_label("Compute bedtime").click();
    harness.run();
    run_until_settled(&mut harness);
    harness.run();
    let first = harness.state().state.bedtime_text();

    // Recompute with unchanged inputs
    harness.get_by_label("Compute bedtime").click();
    harness.run();
    run_until_settled(&mut harness);
    harness.run();
    let second = harness.state().state.bedtime_text();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
