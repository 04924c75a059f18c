//! CLI command integration tests
//!
//! One module per subcommand, covering arguments, output formats and exit codes.

pub mod config_tests;
pub mod dataset_tests;
pub mod extract_tests;
pub mod predict_tests;
pub mod scan_tests;
pub mod train_tests;
