pub mod mvc;

pub use mvc::{launch, run_with, Config, FrontEndKind, MvcError, Result};
