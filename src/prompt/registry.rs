//! @acp:module "Template Registry"
//! @acp:summary "Read-only dispatch table from funnel stage to template function"
//! @acp:domain cli
//! @acp:layer service

use serde::Serialize;

use super::templates::{template_for, TemplateFn};
use crate::error::Result;
use crate::stage::StageId;

/// A generated prompt and the stage it was rendered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub stage: StageId,
    pub label: &'static str,
    #[serde(rename = "prompt")]
    pub text: String,
}

impl Prompt {
    pub fn new(stage: StageId, text: String) -> Self {
        Self {
            stage,
            label: stage.label(),
            text,
        }
    }
}

/// Immutable mapping from every `StageId` to its template
///
/// Built once; lookups index the table by funnel position.
#[derive(Clone, Copy)]
pub struct TemplateRegistry {
    table: [TemplateFn; StageId::COUNT],
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("stages", &StageId::COUNT)
            .finish()
    }
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self {
            table: StageId::ALL.map(template_for),
        }
    }

    /// Render the template for `stage`
    ///
    /// Inputs are expected to be trimmed and non-empty; the session
    /// controller guarantees this before calling.
    pub fn generate(&self, stage: StageId, product: &str, industry: &str, audience: &str) -> String {
        (self.table[stage.index()])(product, industry, audience)
    }

    /// Render by stage tag, failing on tags outside the funnel
    pub fn generate_tag(
        &self,
        tag: &str,
        product: &str,
        industry: &str,
        audience: &str,
    ) -> Result<String> {
        let stage: StageId = tag.parse()?;
        Ok(self.generate(stage, product, industry, audience))
    }

    /// Render and wrap the result with its stage metadata
    pub fn prompt(&self, stage: StageId, product: &str, industry: &str, audience: &str) -> Prompt {
        Prompt::new(stage, self.generate(stage, product, industry, audience))
    }
}
