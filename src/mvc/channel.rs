use log::warn;
use tokio::sync::mpsc::{
    self,
    error::TryRecvError,
    UnboundedReceiver, UnboundedSender,
};

/// Requests flowing from a front-end to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComputeRequest {
    /// Overwrite both inputs.
    Set { x: f64, y: f64 },
    /// Recompute `z` from the last inputs and report it.
    Compute,
    /// Terminate the model loop.
    Stop,
}

/// Results flowing from the model back to the front-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComputeResult {
    /// `z` as currently held by the model, `None` if it was never computed.
    ZUpdated { z: Option<f64> },
}

/// Creates both ends of the model <-> front-end link.
///
/// Two unbounded FIFO queues are allocated, one per direction, so neither side
/// ever blocks on a send.
///
/// # Returns
/// The front-end's end and the model's end, in that order.
pub fn channel() -> (ViewLink, ModelLink) {
    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (res_tx, res_rx) = mpsc::unbounded_channel();

    let view = ViewLink {
        requests: req_tx,
        results: res_rx,
    };
    let model = ModelLink {
        requests: req_rx,
        results: res_tx,
    };

    (view, model)
}

/// Front-end side: writes requests, reads results.
#[derive(Debug)]
pub struct ViewLink {
    requests: UnboundedSender<ComputeRequest>,
    results: UnboundedReceiver<ComputeResult>,
}

impl ViewLink {
    /// Enqueues a request without waiting for any acknowledgment.
    ///
    /// # Returns
    /// `false` if the model end has already gone away.
    pub fn send(&self, request: ComputeRequest) -> bool {
        match self.requests.send(request) {
            Ok(()) => true,
            Err(e) => {
                warn!("model is gone, dropping {:?}", e.0);
                false
            }
        }
    }

    /// Takes the next pending result, if any. Never blocks.
    pub fn try_recv(&mut self) -> Option<ComputeResult> {
        match self.results.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Model side: reads requests, writes results.
#[derive(Debug)]
pub struct ModelLink {
    requests: UnboundedReceiver<ComputeRequest>,
    results: UnboundedSender<ComputeResult>,
}

impl ModelLink {
    /// Waits for the next request.
    ///
    /// Must be called from a plain thread, not from inside an async runtime.
    ///
    /// # Returns
    /// `None` once every front-end sender has been dropped.
    pub fn recv(&mut self) -> Option<ComputeRequest> {
        self.requests.blocking_recv()
    }

    /// Sends a result back to the front-end.
    ///
    /// # Returns
    /// `false` if the front-end end has already gone away.
    pub fn reply(&self, result: ComputeResult) -> bool {
        self.results.send(result).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_arrive_in_order() {
        let (view, mut model) = channel();

        assert!(view.send(ComputeRequest::Set { x: 1.0, y: 2.0 }));
        assert!(view.send(ComputeRequest::Compute));
        drop(view);

        assert_eq!(model.recv(), Some(ComputeRequest::Set { x: 1.0, y: 2.0 }));
        assert_eq!(model.recv(), Some(ComputeRequest::Compute));
        assert_eq!(model.recv(), None);
    }

    #[test]
    fn try_recv_is_empty_until_the_model_replies() {
        let (mut view, model) = channel();
        assert_eq!(view.try_recv(), None);

        assert!(model.reply(ComputeResult::ZUpdated { z: Some(3.0) }));
        assert_eq!(view.try_recv(), Some(ComputeResult::ZUpdated { z: Some(3.0) }));
        assert_eq!(view.try_recv(), None);
    }

    #[test]
    fn sending_to_a_dropped_end_is_reported() {
        let (view, model) = channel();
        drop(model);
        assert!(!view.send(ComputeRequest::Stop));
    }
}
