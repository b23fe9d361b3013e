use log::info;

use super::channel::{ComputeRequest, ComputeResult, ViewLink};
use super::Result;

/// Something able to show the latest `z`.
pub trait View {
    fn render(&mut self, z: Option<f64>);
}

/// A concrete front-end: an I/O medium the controller can drive.
pub trait FrontEnd: View {
    /// Runs one round of the front-end's own input handling.
    ///
    /// May issue requests through `controller` and may clear its running flag.
    ///
    /// # Errors
    /// Returns an error if the underlying I/O medium fails.
    fn refresh(&mut self, controller: &mut ViewController) -> Result<()>;
}

/// Formats `z` the way every front-end displays it.
pub fn display_z(z: Option<f64>) -> String {
    match z {
        Some(value) => format!("{value:?}"),
        None => "None".to_string(),
    }
}

/// Behaviour shared by every front-end: owns the front-end's end of the queues,
/// the last received `z` and the running flag.
#[derive(Debug)]
pub struct ViewController {
    link: ViewLink,
    z: Option<f64>,
    running: bool,
}

impl ViewController {
    pub fn new(link: ViewLink) -> Self {
        Self {
            link,
            z: None,
            running: true,
        }
    }

    pub fn request_set(&self, x: f64, y: f64) {
        self.link.send(ComputeRequest::Set { x, y });
    }

    pub fn request_compute(&self) {
        self.link.send(ComputeRequest::Compute);
    }

    pub fn request_stop(&self) {
        self.link.send(ComputeRequest::Stop);
    }

    /// Clears the running flag; the drive loop exits after the current step.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Last `z` received from the model.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Drains every result currently queued, rendering each one.
    ///
    /// # Returns
    /// How many results were handled.
    pub fn poll<V: View + ?Sized>(&mut self, view: &mut V) -> usize {
        let mut handled = 0;
        while let Some(result) = self.link.try_recv() {
            match result {
                ComputeResult::ZUpdated { z } => {
                    self.z = z;
                    view.render(z);
                }
            }
            handled += 1;
        }
        handled
    }

    /// One iteration of the drive loop: refresh the front-end, then drain results.
    ///
    /// # Errors
    /// Propagates the front-end's refresh failure.
    pub fn step<F: FrontEnd + ?Sized>(&mut self, front_end: &mut F) -> Result<()> {
        front_end.refresh(self)?;
        self.poll(front_end);
        Ok(())
    }

    /// Drives `front_end` until its running flag is cleared, then tells the model to stop.
    ///
    /// `Stop` is sent even when a refresh fails.
    ///
    /// # Errors
    /// Propagates the first refresh failure.
    pub fn drive<F: FrontEnd + ?Sized>(&mut self, front_end: &mut F) -> Result<()> {
        let mut outcome = Ok(());
        while self.running {
            if let Err(e) = self.step(front_end) {
                outcome = Err(e);
                break;
            }
        }

        info!("front-end finished, stopping model");
        self.request_stop();
        outcome
    }
}
