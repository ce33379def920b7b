use super::*;
use crate::detection::{Prediction, RandomSample, TextMetrics};
use crate::service::ServiceError;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// In-memory stand-in for the prediction service.
///
/// Answers are keyed by input text. A text can be gated so its worker blocks
/// until the test releases it, which makes response ordering deterministic.
#[derive(Default)]
pub(super) struct ScriptedService {
    answers: Mutex<HashMap<String, Result<ClassificationResult, ServiceError>>>,
    random: Mutex<Option<Result<RandomSample, ServiceError>>>,
    gates: Mutex<HashMap<String, Receiver<()>>>,
    random_gate: Mutex<Option<Receiver<()>>>,
    classify_calls: AtomicUsize,
    random_calls: AtomicUsize,
}

impl ScriptedService {
    pub(super) fn answer(&self, text: &str, result: Result<ClassificationResult, ServiceError>) {
        self.answers
            .lock()
            .unwrap()
            .insert(text.to_string(), result);
    }

    pub(super) fn answer_random(&self, result: Result<RandomSample, ServiceError>) {
        *self.random.lock().unwrap() = Some(result);
    }

    /// Block the worker for `text` until the returned sender fires.
    pub(super) fn gate(&self, text: &str) -> Sender<()> {
        let (tx, rx) = channel();
        self.gates.lock().unwrap().insert(text.to_string(), rx);
        tx
    }

    /// Block the next random-sample worker until the returned sender fires.
    pub(super) fn gate_random(&self) -> Sender<()> {
        let (tx, rx) = channel();
        *self.random_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub(super) fn classify_calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }

    pub(super) fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }
}

impl PredictionService for ScriptedService {
    fn classify(&self, text: &str) -> Result<ClassificationResult, ServiceError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().unwrap().remove(text);
        if let Some(gate) = gate {
            let _ = gate.recv_timeout(Duration::from_secs(5));
        }
        self.answers
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(ServiceError::Transport("no scripted answer".into())))
    }

    fn random_sample(&self) -> Result<RandomSample, ServiceError> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.random_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.recv_timeout(Duration::from_secs(5));
        }
        self.random
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(ServiceError::Transport("no scripted sample".into())))
    }
}

pub(super) fn controller_with(service: &Arc<ScriptedService>) -> EguiController {
    let service: Arc<dyn PredictionService> = service.clone();
    EguiController::new(service)
}

pub(super) fn sample_result(prediction: Prediction, confidence: f64) -> ClassificationResult {
    let metrics = TextMetrics::from_values([
        ("hashtag_count".to_string(), 2.0),
        ("link_count".to_string(), 1.0),
        ("sentiment_polarity".to_string(), 0.25),
    ])
    .unwrap();
    ClassificationResult::new(prediction, confidence, metrics).unwrap()
}

/// Poll until every worker has reported back.
pub(super) fn wait_for_idle(controller: &mut EguiController) {
    wait_until(controller, |controller| !controller.has_pending_requests());
}

pub(super) fn wait_until(
    controller: &mut EguiController,
    mut done: impl FnMut(&EguiController) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for workers");
        std::thread::sleep(Duration::from_millis(5));
    }
}
