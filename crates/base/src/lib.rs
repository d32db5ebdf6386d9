mod epoch;
pub use epoch::*;

pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod vec2;
pub use vec2::*;

// downstream crates can use base::log::* without their own dependency
pub use log;
