use super::jobs::{JobMessage, RequestId};
use super::*;
use crate::service::ServiceError;
use thiserror::Error;

/// Reasons a submission was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Enter some text to classify")]
    EmptyInput,
}

impl EguiController {
    /// Send the current input to the service on a worker thread.
    ///
    /// Whitespace-only input is rejected without contacting the service.
    pub fn submit(&mut self) -> Result<RequestId, SubmitError> {
        let Some(text) = self.ui.input.submittable_text().map(str::to_string) else {
            self.set_status(SubmitError::EmptyInput.to_string(), StatusTone::Info);
            return Err(SubmitError::EmptyInput);
        };
        let request_id = self.jobs.issue();
        tracing::info!(
            request = request_id.get(),
            chars = text.chars().count(),
            "Submitting text for classification"
        );
        self.jobs
            .spawn_classify(Arc::clone(&self.service), request_id, text);
        self.set_status("Classifying...", StatusTone::Busy);
        Ok(request_id)
    }

    /// Ask the service for a random labelled example.
    pub fn fetch_random_sample(&mut self) -> RequestId {
        let request_id = self.jobs.issue();
        tracing::info!(request = request_id.get(), "Requesting random sample");
        self.jobs
            .spawn_random_sample(Arc::clone(&self.service), request_id);
        self.set_status("Fetching a random example...", StatusTone::Busy);
        request_id
    }

    /// Drain finished workers. Only the latest issued request is applied.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            let request_id = message.request_id();
            if !self.jobs.is_latest(request_id) {
                tracing::debug!(request = request_id.get(), "Dropping superseded response");
                continue;
            }
            match message {
                JobMessage::Classified { result, .. } => match result {
                    Ok(result) => self.apply_result(result),
                    Err(err) => self.report_failure("Classification", request_id, &err),
                },
                JobMessage::RandomSample { result, .. } => match result {
                    Ok(sample) => {
                        self.ui.input.text = sample.text;
                        self.apply_result(sample.result);
                    }
                    Err(err) => self.report_failure("Random sample", request_id, &err),
                },
            }
        }
    }

    fn apply_result(&mut self, result: ClassificationResult) {
        let status = format!(
            "Prediction: {} ({:.2}% confidence)",
            result.prediction(),
            result.confidence()
        );
        tracing::info!(
            prediction = result.prediction().label(),
            confidence = result.confidence(),
            "Applied classification result"
        );
        self.result = Some(Arc::new(result));
        self.set_status(status, StatusTone::Info);
    }

    fn report_failure(&mut self, what: &str, request_id: RequestId, err: &ServiceError) {
        tracing::warn!(request = request_id.get(), "{what} failed: {err}");
        self.set_status(format!("{what} failed: {err}"), StatusTone::Warning);
    }
}
