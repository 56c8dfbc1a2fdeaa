//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, TitlesConfig, DEFAULT_APP_NAME, DEFAULT_FAILURE_TITLE, DEFAULT_OUTPUT,
    DEFAULT_SUCCESS_TITLE, DEFAULT_TITLE,
};
