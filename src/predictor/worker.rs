//! Predictor worker thread
//!
//! Runs model inference off the UI thread so the render loop never blocks
//! on the model. Commands and events travel over bounded channels; the UI
//! guarantees at most one in-flight request at a time.

use crate::model::SleepModel;
use crate::predictor::{compute_bedtime, PredictCommand, PredictEvent};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

/// Channel capacity; one in-flight request plus slack for shutdown
const CHANNEL_CAPACITY: usize = 4;

/// Handle to the predictor worker thread
pub struct PredictorHandle {
    command_tx: Sender<PredictCommand>,
    event_rx: Receiver<PredictEvent>,
    thread: Option<JoinHandle<()>>,
}

impl PredictorHandle {
    /// Spawn the worker with the given model
    pub fn spawn(model: Box<dyn SleepModel>) -> Self {
        let (command_tx, command_rx) = bounded(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        let thread = std::thread::spawn(move || {
            run_worker(model, command_rx, event_tx);
        });

        Self {
            command_tx,
            event_rx,
            thread: Some(thread),
        }
    }

    /// Sender for prediction commands
    pub fn command_tx(&self) -> Sender<PredictCommand> {
        self.command_tx.clone()
    }

    /// Receiver for prediction events
    pub fn event_rx(&self) -> Receiver<PredictEvent> {
        self.event_rx.clone()
    }
}

impl Drop for PredictorHandle {
    fn drop(&mut self) {
        let _ = self.command_tx.send(PredictCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Predictor worker panicked during shutdown");
            }
        }
    }
}

fn run_worker(
    model: Box<dyn SleepModel>,
    command_rx: Receiver<PredictCommand>,
    event_tx: Sender<PredictEvent>,
) {
    info!("Predictor worker started with model {}", model.name());

    while let Ok(command) = command_rx.recv() {
        match command {
            PredictCommand::Compute { inputs, request_id } => {
                debug!("Computing bedtime for request {}", request_id);

                let event = match compute_bedtime(&inputs, model.as_ref()) {
                    Ok(prediction) => PredictEvent::Computed {
                        prediction,
                        request_id,
                    },
                    Err(error) => {
                        warn!("Prediction {} failed: {}", request_id, error);
                        PredictEvent::Failed { error, request_id }
                    }
                };

                if event_tx.send(event).is_err() {
                    // UI side dropped its receiver
                    break;
                }
            }
            PredictCommand::Shutdown => break,
        }
    }

    info!("Predictor worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::UserInputs;
    use crate::predictor::testing::{FailingModel, FixedModel};
    use chrono::NaiveTime;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn test_worker_computes_and_replies() {
        let handle = PredictorHandle::spawn(Box::new(FixedModel(28800.0)));
        let request_id = Uuid::new_v4();

        handle
            .command_tx()
            .send(PredictCommand::Compute {
                inputs: UserInputs::default(),
                request_id,
            })
            .unwrap();

        let event = handle
            .event_rx()
            .recv_timeout(Duration::from_secs(5))
            .unwrap();

        match event {
            PredictEvent::Computed {
                prediction,
                request_id: id,
            } => {
                assert_eq!(id, request_id);
                assert_eq!(
                    prediction.bedtime,
                    NaiveTime::from_hms_opt(23, 0, 0).unwrap()
                );
            }
            other => panic!("expected Computed, got {:?}", other),
        }
    }

    #[test]
    fn test_worker_reports_failure() {
        let handle = PredictorHandle::spawn(Box::new(FailingModel));
        let request_id = Uuid::new_v4();

        handle
            .command_tx()
            .send(PredictCommand::Compute {
                inputs: UserInputs::default(),
                request_id,
            })
            .unwrap();

        let event = handle
            .event_rx()
            .recv_timeout(Duration::from_secs(5))
            .unwrap();

        assert!(matches!(
            event,
            PredictEvent::Failed { request_id: id, .. } if id == request_id
        ));
    }

    #[test]
    fn test_worker_shuts_down_on_drop() {
        let handle = PredictorHandle::spawn(Box::new(FixedModel(28800.0)));
        drop(handle);
        // Drop joins the thread; reaching this line means shutdown worked.
    }
}
