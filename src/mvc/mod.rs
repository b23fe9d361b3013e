//! Model / ViewController pair talking over two unbounded queues.
//!
//! The model owns the state and runs on its own thread. A front-end (console
//! or window) runs on the calling thread and only ever talks to the model by
//! enqueueing [`ComputeRequest`]s and draining [`ComputeResult`]s.

pub mod channel;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod model;

use log::info;

pub use channel::{ComputeRequest, ComputeResult, ModelLink, ViewLink};
pub use config::{Config, FrontEndKind};
pub use console::ConsoleFrontEnd;
pub use controller::{FrontEnd, View, ViewController};
pub use error::{MvcError, Result};
pub use model::Model;

/// Starts the model thread and drives `front_end` on the calling thread.
///
/// Returns after the front-end has finished and the model thread has been joined.
///
/// # Errors
/// Returns the front-end's failure, `Io` if the thread cannot be spawned, or
/// `ModelPanicked` if it cannot be joined.
pub fn run_with<F: FrontEnd + ?Sized>(front_end: &mut F) -> Result<()> {
    let (view, link) = channel::channel();
    let model = Model::new().spawn(link)?;

    let mut controller = ViewController::new(view);
    let outcome = controller.drive(front_end);
    drop(controller);

    model.join().map_err(|_| MvcError::ModelPanicked)?;
    outcome
}

/// Runs the front-end selected by `config` until the user quits.
///
/// # Errors
/// `FrontEndUnavailable` before anything is started if the selected front-end
/// is not compiled in; otherwise as [`run_with`].
pub fn launch(config: &Config) -> Result<()> {
    // Configs built with `Config::new` skip the check done by `from_args`.
    if !config.front_end.is_available() {
        return Err(MvcError::FrontEndUnavailable(config.front_end.to_string()));
    }
    info!("starting {} front-end", config.front_end);

    match config.front_end {
        FrontEndKind::Cmd => run_with(&mut ConsoleFrontEnd::stdio(config.settle_delay)),
        FrontEndKind::Tk => run_graphical(config),
    }
}

#[cfg(feature = "gui")]
fn run_graphical(config: &Config) -> Result<()> {
    let (view, link) = channel::channel();
    let model = Model::new().spawn(link)?;

    let outcome = gui::run(ViewController::new(view), config.poll_interval);

    model.join().map_err(|_| MvcError::ModelPanicked)?;
    outcome
}

#[cfg(not(feature = "gui"))]
fn run_graphical(config: &Config) -> Result<()> {
    Err(MvcError::FrontEndUnavailable(config.front_end.to_string()))
}
