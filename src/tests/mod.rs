mod input_tests;
mod runner_tests;

use log::info;

// Initialize logging once; later calls find the logger already set
pub(crate) fn setup() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }
}
