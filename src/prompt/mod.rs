//! @acp:module "Prompt"
//! @acp:summary "Stage templates and the registry that dispatches to them"
//! @acp:domain cli
//! @acp:layer feature

pub mod registry;
pub mod templates;

pub use registry::{Prompt, TemplateRegistry};
pub use templates::{template_for, TemplateFn, INSTRUCTION_FOOTER};
