pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::logging::{ConsoleLogger, LoggerKind, TracingLogger};
pub use app::wiring::{build_ender, build_for_customer, ConfiguredEnder};
pub use config::{preset::Preset, toml_config::TomlConfig};
pub use crate::core::{
    cancelling::IssuanceCanceller,
    ending::CourseEnder,
    selection::{
        ActiveAndLocalCoursesSelector, ActiveAndLocalIssuancesSelector, ActiveCoursesSelector,
        ActiveIssuancesSelector, PermittedCoursesSelector,
    },
};
pub use domain::model::{Course, CourseStatus, Issuance, IssuanceStatus, Source};
pub use domain::ports::{Canceller, CourseSelector, IssuanceSelector, Logger};
pub use utils::error::{EnderError, Result};
