pub mod builder;
pub mod catalog;
pub mod templates;

pub use builder::build_prompt;
pub use catalog::{
    generate_validation_probes, ValidationProbe, MAX_COMPARISON_COMPETITORS, PROBE_AUDIENCES,
};
pub use templates::{template_for, validate_templates, PLACEHOLDER_NAMES};
