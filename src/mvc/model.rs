use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use super::channel::{ComputeRequest, ComputeResult, ModelLink};
use super::Result;

/// What the model loop should do after handling one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing to report, keep waiting.
    Idle,
    /// Send this result to the front-end, then keep waiting.
    Reply(ComputeResult),
    /// Leave the loop.
    Stop,
}

/// Program state and logic: two inputs and their sum.
///
/// The model lives on its own thread and is only reachable through its
/// request queue once spawned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Model {
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, x: f64, y: f64) {
        self.x = Some(x);
        self.y = Some(y);
    }

    /// The last computed `z`, `None` until the first successful compute.
    pub fn data(&self) -> Option<f64> {
        self.z
    }

    /// Sets `z = x + y` when both inputs are present; otherwise `z` is untouched.
    pub fn compute(&mut self) {
        if let (Some(x), Some(y)) = (self.x, self.y) {
            self.z = Some(x + y);
        }
    }

    /// Applies a single request to the model state.
    ///
    /// `Compute` always replies, even when nothing could be computed, in which
    /// case the previously held (possibly unset) `z` is reported.
    pub fn handle(&mut self, request: ComputeRequest) -> Step {
        match request {
            ComputeRequest::Set { x, y } => {
                self.set_data(x, y);
                debug!("set x, y to {x}, {y}");
                Step::Idle
            }
            ComputeRequest::Compute => {
                self.compute();
                debug!("computed x + y = z = {:?}", self.z);
                Step::Reply(ComputeResult::ZUpdated { z: self.z })
            }
            ComputeRequest::Stop => {
                debug!("exiting");
                Step::Stop
            }
        }
    }

    /// Moves the model onto its own thread.
    ///
    /// The thread blocks on the request queue and ends on `Stop`, when every
    /// front-end sender is dropped, or when the front-end stops listening.
    ///
    /// # Args
    /// * `link` - The model's end of the queues.
    ///
    /// # Returns
    /// The handle of the `model` thread.
    ///
    /// # Errors
    /// Returns `MvcError::Io` if the thread could not be spawned.
    pub fn spawn(self, link: ModelLink) -> Result<JoinHandle<()>> {
        let handle = thread::Builder::new()
            .name("model".to_string())
            .spawn(move || self.run(link))?;
        Ok(handle)
    }

    fn run(mut self, mut link: ModelLink) {
        info!("model started");

        while let Some(request) = link.recv() {
            match self.handle(request) {
                Step::Idle => {}
                Step::Reply(result) => {
                    if !link.reply(result) {
                        warn!("front-end is gone, dropping {result:?}");
                        break;
                    }
                }
                Step::Stop => break,
            }
        }

        info!("model stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc::channel;

    fn z_of(step: Step) -> Option<f64> {
        match step {
            Step::Reply(ComputeResult::ZUpdated { z }) => z,
            other => panic!("expected a reply, got {other:?}"),
        }
    }

    #[test]
    fn set_then_compute_reports_the_sum() {
        let pairs = [(2.0, 3.0), (-1.5, 1.5), (0.1, 0.2), (1e300, 1e300), (-7.25, -0.75)];

        for (x, y) in pairs {
            let mut model = Model::new();
            assert_eq!(model.handle(ComputeRequest::Set { x, y }), Step::Idle);
            let z = z_of(model.handle(ComputeRequest::Compute)).unwrap();
            assert!((z - (x + y)).abs() <= f64::EPSILON * (x + y).abs().max(1.0));
        }
    }

    #[test]
    fn compute_before_set_reports_unset() {
        let mut model = Model::new();
        assert_eq!(z_of(model.handle(ComputeRequest::Compute)), None);
        assert_eq!(model.data(), None);
    }

    #[test]
    fn compute_twice_is_idempotent() {
        let mut model = Model::new();
        model.handle(ComputeRequest::Set { x: 4.0, y: 0.5 });

        let first = z_of(model.handle(ComputeRequest::Compute));
        let second = z_of(model.handle(ComputeRequest::Compute));
        assert_eq!(first, Some(4.5));
        assert_eq!(first, second);
    }

    #[test]
    fn set_does_not_invalidate_z() {
        let mut model = Model::new();
        model.set_data(1.0, 1.0);
        model.compute();

        model.handle(ComputeRequest::Set { x: 10.0, y: 10.0 });
        assert_eq!(model.data(), Some(2.0));
        assert_eq!(z_of(model.handle(ComputeRequest::Compute)), Some(20.0));
    }

    #[test]
    fn stop_is_reported() {
        let mut model = Model::new();
        assert_eq!(model.handle(ComputeRequest::Stop), Step::Stop);
    }

    #[test]
    fn thread_replies_in_order_and_stops() {
        let (mut view, link) = channel::channel();

        view.send(ComputeRequest::Compute);
        view.send(ComputeRequest::Set { x: 2.0, y: 3.0 });
        view.send(ComputeRequest::Compute);
        view.send(ComputeRequest::Stop);

        Model::new().spawn(link).unwrap().join().unwrap();

        assert_eq!(view.try_recv(), Some(ComputeResult::ZUpdated { z: None }));
        assert_eq!(view.try_recv(), Some(ComputeResult::ZUpdated { z: Some(5.0) }));
        assert_eq!(view.try_recv(), None);
    }

    #[test]
    fn stop_discards_queued_requests() {
        let (mut view, link) = channel::channel();

        view.send(ComputeRequest::Stop);
        view.send(ComputeRequest::Set { x: 1.0, y: 1.0 });
        view.send(ComputeRequest::Compute);

        Model::new().spawn(link).unwrap().join().unwrap();
        assert_eq!(view.try_recv(), None);
    }

    #[test]
    fn thread_ends_when_front_end_drops() {
        let (view, link) = channel::channel();
        let handle = Model::new().spawn(link).unwrap();

        drop(view);
        handle.join().unwrap();
    }
}
