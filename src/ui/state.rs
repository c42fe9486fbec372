//! Application state management
//!
//! This module provides the central state for the Restwise UI: the three
//! user inputs, the last computed prediction, and the two-flag display
//! state that decides whether the result panel is shown.

use crate::inputs::UserInputs;
use crate::predictor::{PredictCommand, PredictEvent, Prediction, PredictorHandle};
use crate::timeofday::format_time;
use chrono::NaiveTime;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};
use uuid::Uuid;

/// Placeholder shown while no prediction is visible
pub const PLACEHOLDER_GLYPH: &str = "???";

/// Whether a computed bedtime exists and whether it is currently shown.
///
/// Invariant: `result_visible` implies `has_prediction`. Editing an input
/// hides the result but keeps the stale prediction in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// A prediction has been computed at least once
    pub has_prediction: bool,
    /// The result panel is showing the prediction
    pub result_visible: bool,
}

impl DisplayState {
    /// Mark the freshly computed prediction as shown
    fn reveal(&mut self) {
        self.has_prediction = true;
        self.result_visible = true;
    }

    /// Hide the result without forgetting that one was computed
    fn hide(&mut self) {
        self.result_visible = false;
    }

    /// Check the visibility invariant
    pub fn invariant_holds(&self) -> bool {
        !self.result_visible || self.has_prediction
    }
}

/// Central application state
pub struct AppState {
    /// The three user-adjustable inputs
    pub inputs: UserInputs,

    /// Last computed prediction; survives edits, hidden until recomputed
    pub prediction: Option<Prediction>,

    /// Result visibility flags
    pub display: DisplayState,

    /// Request id of the single permitted in-flight prediction
    in_flight: Option<Uuid>,

    /// Last error message, shown in the error banner
    pub last_error: Option<String>,

    /// Channel to send predictor commands
    pub command_tx: Option<Sender<PredictCommand>>,

    /// Channel to receive predictor events
    pub event_rx: Option<Receiver<PredictEvent>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with default inputs
    pub fn new() -> Self {
        Self {
            inputs: UserInputs::default(),
            prediction: None,
            display: DisplayState::default(),
            in_flight: None,
            last_error: None,
            command_tx: None,
            event_rx: None,
        }
    }

    /// Wire the state to a predictor worker
    pub fn connect(&mut self, predictor: &PredictorHandle) {
        self.command_tx = Some(predictor.command_tx());
        self.event_rx = Some(predictor.event_rx());
    }

    /// Set the desired sleep duration, clamped and snapped to 0.25 steps
    pub fn set_sleep_hours(&mut self, hours: f64) {
        let clamped = UserInputs::clamp_sleep_hours(hours);
        if (clamped - self.inputs.sleep_hours).abs() > f64::EPSILON {
            self.inputs.sleep_hours = clamped;
            self.touch_inputs();
        }
    }

    /// Step the sleep duration by whole stepper increments
    pub fn step_sleep_hours(&mut self, steps: i32) {
        let delta = f64::from(steps) * crate::inputs::SLEEP_HOURS_STEP;
        self.set_sleep_hours(self.inputs.sleep_hours + delta);
    }

    /// Set the coffee intake, clamped to [1, 10]
    pub fn set_coffee_cups(&mut self, cups: u32) {
        let clamped = UserInputs::clamp_coffee_cups(cups);
        if clamped != self.inputs.coffee_cups {
            self.inputs.coffee_cups = clamped;
            self.touch_inputs();
        }
    }

    /// Step the coffee intake up or down one cup
    pub fn step_coffee_cups(&mut self, steps: i32) {
        let cups = self.inputs.coffee_cups.saturating_add_signed(steps);
        self.set_coffee_cups(cups.max(1));
    }

    /// Set the wake-up time
    pub fn set_wake_time(&mut self, time: NaiveTime) {
        if time != self.inputs.wake_time {
            self.inputs.wake_time = time;
            self.touch_inputs();
        }
    }

    /// Step the wake-up hour, wrapping around the day
    pub fn step_wake_hour(&mut self, steps: i32) {
        use chrono::Timelike;
        let hour = (self.inputs.wake_time.hour() as i32 + steps).rem_euclid(24) as u32;
        if let Some(time) =
            NaiveTime::from_hms_opt(hour, self.inputs.wake_time.minute(), 0)
        {
            self.set_wake_time(time);
        }
    }

    /// Step the wake-up minute, wrapping within the hour
    pub fn step_wake_minute(&mut self, steps: i32) {
        use chrono::Timelike;
        let minute = (self.inputs.wake_time.minute() as i32 + steps).rem_euclid(60) as u32;
        if let Some(time) =
            NaiveTime::from_hms_opt(self.inputs.wake_time.hour(), minute, 0)
        {
            self.set_wake_time(time);
        }
    }

    /// Any input edit hides the result and clears the error banner. The
    /// stale prediction value itself is kept.
    fn touch_inputs(&mut self) {
        self.display.hide();
        self.last_error = None;
    }

    /// Whether a prediction request is in flight
    pub fn is_computing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Request a bedtime prediction for the current inputs.
    ///
    /// At most one request is in flight at a time; further requests are
    /// ignored until the reply arrives.
    pub fn request_prediction(&mut self) {
        if self.is_computing() {
            debug!("Prediction already in flight, ignoring request");
            return;
        }

        let Some(tx) = &self.command_tx else {
            warn!("No predictor connected, ignoring request");
            return;
        };

        let request_id = Uuid::new_v4();
        if tx
            .send(PredictCommand::Compute {
                inputs: self.inputs.clone(),
                request_id,
            })
            .is_err()
        {
            self.last_error =
                Some(crate::RestwiseError::Channel("predictor gone".to_string()).user_message());
            return;
        }

        self.in_flight = Some(request_id);
        self.last_error = None;
        debug!("Requested prediction {}", request_id);
    }

    /// Drain predictor events and apply them
    pub fn poll_events(&mut self) {
        let events: Vec<PredictEvent> = if let Some(rx) = &self.event_rx {
            rx.try_iter().collect()
        } else {
            Vec::new()
        };

        for event in events {
            self.apply_event(event);
        }
    }

    /// Apply one predictor event.
    ///
    /// The prediction value and both display flags update together here;
    /// no other code path reveals the result. Replies whose request id no
    /// longer matches the in-flight request are discarded.
    pub fn apply_event(&mut self, event: PredictEvent) {
        match event {
            PredictEvent::Computed {
                prediction,
                request_id,
            } => {
                if self.in_flight != Some(request_id) {
                    debug!("Discarding stale prediction {}", request_id);
                    return;
                }
                self.in_flight = None;
                self.prediction = Some(prediction);
                self.display.reveal();
            }
            PredictEvent::Failed { error, request_id } => {
                if self.in_flight != Some(request_id) {
                    debug!("Discarding stale failure {}", request_id);
                    return;
                }
                self.in_flight = None;
                // Display state is left untouched: no partial success
                self.last_error = Some(error.user_message());
            }
        }
    }

    /// Text for the bedtime display: the formatted time when visible,
    /// otherwise the placeholder glyph
    pub fn bedtime_text(&self) -> String {
        if self.display.result_visible {
            if let Some(prediction) = &self.prediction {
                return format_time(prediction.bedtime);
            }
        }
        PLACEHOLDER_GLYPH.to_string()
    }
}
