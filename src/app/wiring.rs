use crate::config::preset::Preset;
use crate::config::toml_config::TomlConfig;
use crate::core::cancelling::IssuanceCanceller;
use crate::core::ending::CourseEnder;
use crate::core::{CourseSelector, IssuanceSelector, Logger};

/// A course ender whose collaborators are chosen at runtime.
pub type ConfiguredEnder = CourseEnder<
    Box<dyn Logger>,
    IssuanceCanceller<Box<dyn IssuanceSelector>>,
    Box<dyn CourseSelector>,
>;

pub fn build_ender(preset: Preset, logger: Box<dyn Logger>) -> ConfiguredEnder {
    CourseEnder::new(
        logger,
        IssuanceCanceller::new(preset.issuance_selector()),
        preset.course_selector(),
    )
}

/// Resolves the customer's preset from `config` and builds the matching ender.
pub fn build_for_customer(config: &TomlConfig, customer_number: i32) -> (Preset, ConfiguredEnder) {
    let preset = config.preset_for(customer_number);
    tracing::debug!(
        "Customer {} uses preset '{}' with {} logger",
        customer_number,
        preset,
        config.logger.as_str()
    );
    (preset, build_ender(preset, config.logger.build()))
}
