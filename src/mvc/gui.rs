use std::time::Duration;

use eframe::egui;
use log::{error, info};

use super::controller::{display_z, FrontEnd, View, ViewController};
use super::{MvcError, Result};

const TITLE: &str = "M-VC";

/// Reads both entries as numbers; `None` if either does not parse.
pub fn parse_inputs(x: &str, y: &str) -> Option<(f64, f64)> {
    let x = x.trim().parse::<f64>().ok()?;
    let y = y.trim().parse::<f64>().ok()?;
    Some((x, y))
}

/// The form: two entries, the output field and the Calculate action.
struct Window {
    ctx: egui::Context,
    input_x: String,
    input_y: String,
    output_z: String,
    focused: bool,
}

impl Window {
    fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            input_x: String::new(),
            input_y: String::new(),
            output_z: String::new(),
            focused: false,
        }
    }

    fn calculate(&self, controller: &ViewController) {
        if let Some((x, y)) = parse_inputs(&self.input_x, &self.input_y) {
            controller.request_set(x, y);
            controller.request_compute();
        }
    }
}

impl View for Window {
    fn render(&mut self, z: Option<f64>) {
        self.output_z = display_z(z);
    }
}

impl FrontEnd for Window {
    fn refresh(&mut self, controller: &mut ViewController) -> Result<()> {
        if self.ctx.input(|i| i.viewport().close_requested()) {
            controller.stop();
            return Ok(());
        }

        let mut calculate = false;
        egui::CentralPanel::default().show(&self.ctx, |ui| {
            egui::Grid::new("form")
                .num_columns(3)
                .spacing([10.0, 10.0])
                .show(ui, |ui| {
                    ui.label("input X");
                    let entry_x = ui.add(egui::TextEdit::singleline(&mut self.input_x).desired_width(70.0));
                    if !self.focused {
                        entry_x.request_focus();
                        self.focused = true;
                    }
                    ui.end_row();

                    ui.label("input Y");
                    ui.add(egui::TextEdit::singleline(&mut self.input_y).desired_width(70.0));
                    ui.end_row();

                    ui.label("output Z");
                    ui.label(self.output_z.as_str());
                    if ui.button("Calculate").clicked() {
                        calculate = true;
                    }
                    ui.end_row();
                });
        });

        if self.ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            calculate = true;
        }
        if calculate {
            self.calculate(controller);
        }

        Ok(())
    }
}

/// eframe application: every frame is one step of the drive loop.
struct GuiApp {
    controller: ViewController,
    window: Window,
    poll_interval: Duration,
    stopped: bool,
}

impl GuiApp {
    fn new(controller: ViewController, ctx: egui::Context, poll_interval: Duration) -> Self {
        Self {
            controller,
            window: Window::new(ctx),
            poll_interval,
            stopped: false,
        }
    }

    /// One step of the drive loop, run inside the toolkit's frame.
    fn frame(&mut self, ctx: &egui::Context) {
        if self.stopped {
            return;
        }

        if let Err(e) = self.controller.step(&mut self.window) {
            error!("gui refresh failed: {e}");
            self.controller.stop();
        }

        if self.controller.is_running() {
            // No blocking dispatch: keep waking up to drain results.
            ctx.request_repaint_after(self.poll_interval);
        } else {
            self.finish();
        }
    }

    /// Sends `Stop` to the model, once.
    fn finish(&mut self) {
        if !self.stopped {
            info!("window closed, stopping model");
            self.controller.request_stop();
            self.stopped = true;
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

impl Drop for GuiApp {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Opens the window and drives `controller` from the toolkit's event loop.
///
/// Returns once the window is closed; by then `Stop` has been sent.
///
/// # Errors
/// Returns `MvcError::Gui` if the window could not be created.
pub fn run(controller: ViewController, poll_interval: Duration) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([260.0, 130.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Box::new(GuiApp::new(controller, cc.egui_ctx.clone(), poll_interval))),
    )
    .map_err(|e| MvcError::Gui(e.to_string()))
}
