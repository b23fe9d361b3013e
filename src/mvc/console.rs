use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use super::controller::{display_z, FrontEnd, View, ViewController};
use super::Result;

const PROMPT: &str = "> ";

const HELP: &str = "set X Y, where X and Y are numbers\ncalculate / calc\nexit";

const NOT_RECOGNIZED: &str = "Input not recognized. Try `help`";

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Set { x: f64, y: f64 },
    /// `set` with missing or non-numeric arguments; silently ignored.
    Malformed,
    Calculate,
    Exit,
    Unknown(String),
}

/// Parses one line of input. An empty line reads as the unknown command `0`.
pub fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Command::Unknown("0".to_string());
    };

    match cmd {
        "help" => Command::Help,
        "set" => {
            let x = words.next().map(str::parse::<f64>);
            let y = words.next().map(str::parse::<f64>);
            match (x, y) {
                (Some(Ok(x)), Some(Ok(y))) => Command::Set { x, y },
                _ => Command::Malformed,
            }
        }
        "calculate" | "calc" => Command::Calculate,
        "exit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Command-line front-end: one prompt per refresh, results printed as `Z = ...`.
pub struct ConsoleFrontEnd<R, W> {
    input: R,
    output: W,
    settle: Duration,
}

impl ConsoleFrontEnd<StdinLock<'static>, Stdout> {
    /// Console front-end bound to the process's stdin and stdout.
    pub fn stdio(settle: Duration) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), settle)
    }
}

impl<R: BufRead, W: Write> ConsoleFrontEnd<R, W> {
    /// # Args
    /// * `input` - Where command lines are read from.
    /// * `output` - Where prompts, help and results are written.
    /// * `settle` - Pause after each handled command so the model can answer
    ///   before the next prompt.
    pub fn new(input: R, output: W, settle: Duration) -> Self {
        Self {
            input,
            output,
            settle,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> View for ConsoleFrontEnd<R, W> {
    fn render(&mut self, z: Option<f64>) {
        if let Err(e) = writeln!(self.output, "Z = {}", display_z(z)) {
            warn!("failed to print z: {e}");
        }
    }
}

impl<R: BufRead, W: Write> FrontEnd for ConsoleFrontEnd<R, W> {
    fn refresh(&mut self, controller: &mut ViewController) -> Result<()> {
        let Some(line) = self.read_line()? else {
            debug!("end of input");
            controller.stop();
            return Ok(());
        };

        match parse_command(&line) {
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Set { x, y } => controller.request_set(x, y),
            Command::Malformed => {}
            Command::Calculate => controller.request_compute(),
            Command::Exit => {
                controller.stop();
                return Ok(());
            }
            Command::Unknown(cmd) => {
                debug!("unknown command {cmd:?}");
                writeln!(self.output, "{NOT_RECOGNIZED}")?;
            }
        }

        // Gives the model a chance to answer before the next prompt.
        thread::sleep(self.settle);
        Ok(())
    }
}
