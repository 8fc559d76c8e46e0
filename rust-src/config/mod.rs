//! Configuration and settings for the analytics dashboard.

mod settings;

pub use settings::{
    get_default_data_path,
    get_export_dir,
    get_log_path,
    resolve_data_path,
    BAR_WIDTH,
    LOG_ENV_VAR,
    TICK_RATE_MS,
    WINDOW_DAYS,
};
