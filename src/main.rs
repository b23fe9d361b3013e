use std::env;
use std::process;

use mvc_queues::mvc::config::usage;
use mvc_queues::{launch, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Read the arguments to determine which ViewController drives the model
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("mvc-queues");

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            if !e.is_usage() {
                return Err(e.into());
            }
            if !matches!(e, mvc_queues::MvcError::MissingFrontEnd) {
                eprintln!("{e}");
            }
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    launch(&config)?;
    Ok(())
}
