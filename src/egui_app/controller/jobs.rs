use crate::detection::{ClassificationResult, RandomSample};
use crate::service::{PredictionService, ServiceError};
use std::sync::{
    Arc,
    mpsc::{Receiver, Sender},
};
use std::thread;

type TryRecvError = std::sync::mpsc::TryRecvError;

/// Sequence number attached to every service request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

pub(crate) enum JobMessage {
    Classified {
        request_id: RequestId,
        result: Result<ClassificationResult, ServiceError>,
    },
    RandomSample {
        request_id: RequestId,
        result: Result<RandomSample, ServiceError>,
    },
}

impl JobMessage {
    pub(crate) fn request_id(&self) -> RequestId {
        match self {
            JobMessage::Classified { request_id, .. }
            | JobMessage::RandomSample { request_id, .. } => *request_id,
        }
    }
}

/// Worker bookkeeping: the message channel, the latest issued request and the
/// number of workers that have not reported back yet.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    latest: Option<RequestId>,
    in_flight: usize,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            latest: None,
            in_flight: 0,
        }
    }

    /// Allocate the next sequence number; it supersedes every earlier one.
    pub(super) fn issue(&mut self) -> RequestId {
        let request_id = RequestId(self.next_request_id);
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.latest = Some(request_id);
        request_id
    }

    pub(super) fn is_latest(&self, request_id: RequestId) -> bool {
        self.latest == Some(request_id)
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(message)
    }

    pub(super) fn spawn_classify(
        &mut self,
        service: Arc<dyn PredictionService>,
        request_id: RequestId,
        text: String,
    ) {
        self.spawn_worker(JobKind::Classify, request_id, move || {
            JobMessage::Classified {
                request_id,
                result: service.classify(&text),
            }
        });
    }

    pub(super) fn spawn_random_sample(
        &mut self,
        service: Arc<dyn PredictionService>,
        request_id: RequestId,
    ) {
        self.spawn_worker(JobKind::RandomSample, request_id, move || {
            JobMessage::RandomSample {
                request_id,
                result: service.random_sample(),
            }
        });
    }

    fn spawn_worker<F>(&mut self, kind: JobKind, request_id: RequestId, work: F)
    where
        F: FnOnce() -> JobMessage + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        let spawned = thread::Builder::new()
            .name(kind.thread_name().to_string())
            .spawn(move || {
                let _ = tx.send(work());
            });
        if let Err(err) = spawned {
            tracing::warn!(
                request = request_id.get(),
                "Failed to start {} worker: {err}",
                kind.thread_name()
            );
            let failure = ServiceError::Transport(format!("Failed to start worker: {err}"));
            let _ = self.message_tx.send(kind.failed(request_id, failure));
        }
    }
}

#[derive(Clone, Copy)]
enum JobKind {
    Classify,
    RandomSample,
}

impl JobKind {
    fn thread_name(self) -> &'static str {
        match self {
            JobKind::Classify => "botlens-classify",
            JobKind::RandomSample => "botlens-random-sample",
        }
    }

    fn failed(self, request_id: RequestId, err: ServiceError) -> JobMessage {
        match self {
            JobKind::Classify => JobMessage::Classified {
                request_id,
                result: Err(err),
            },
            JobKind::RandomSample => JobMessage::RandomSample {
                request_id,
                result: Err(err),
            },
        }
    }
}
