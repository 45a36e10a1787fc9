//! Per-language pattern detectors

pub mod console_log;
pub mod loose_equality;
pub mod mutable_default;
pub mod naming_convention;
pub mod print_call;
pub mod var_decl;

pub use console_log::ConsoleLogRule;
pub use loose_equality::LooseEqualityRule;
pub use mutable_default::MutableDefaultRule;
pub use naming_convention::NamingConventionRule;
pub use print_call::PrintCallRule;
pub use var_decl::VarDeclRule;

use crate::{Finding, Language};

/// Trait for pattern detectors. Each detector is a pure function of the
/// snippet, scoped to one language.
pub trait Detector {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Language this rule applies to
    fn language(&self) -> Language;

    /// Scan the snippet and return findings
    fn detect(&self, code: &str) -> Vec<Finding>;
}

/// All detectors in registration order; output order follows this order.
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(VarDeclRule::new()),
        Box::new(LooseEqualityRule::new()),
        Box::new(ConsoleLogRule::new()),
        Box::new(PrintCallRule::new()),
        Box::new(NamingConventionRule::new()),
        Box::new(MutableDefaultRule::new()),
    ]
}
