//! @acp:module "Session Inputs"
//! @acp:summary "Form snapshot and its validated form"
//! @acp:domain cli
//! @acp:layer model

use crate::error::{FunnelError, Result};
use crate::stage::StageId;

/// Snapshot of the form fields at the moment of a user action
///
/// Owned by the front end; the controller only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInputs {
    pub product: String,
    pub industry: String,
    pub audience: String,
    /// Raw value of the stage selector, if one is chosen
    pub stage: Option<String>,
}

impl UserInputs {
    pub fn new(
        product: impl Into<String>,
        industry: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            industry: industry.into(),
            audience: audience.into(),
            stage: None,
        }
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Check that product, industry and audience are non-empty once trimmed
    pub fn validate_fields(&self) -> Result<ValidatedInputs> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FunnelError::Validation { missing });
        }
        Ok(self.trimmed())
    }

    /// Field validation plus a selected, known stage
    pub fn validate_with_stage(&self) -> Result<(ValidatedInputs, StageId)> {
        let mut missing = self.missing_fields();
        let tag = self.stage.as_deref().filter(|s| !s.trim().is_empty());
        if tag.is_none() {
            missing.push("stage");
        }
        if !missing.is_empty() {
            return Err(FunnelError::Validation { missing });
        }

        let stage: StageId = tag.unwrap_or_default().parse()?;
        Ok((self.trimmed(), stage))
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("product", &self.product),
            ("industry", &self.industry),
            ("audience", &self.audience),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn trimmed(&self) -> ValidatedInputs {
        ValidatedInputs {
            product: self.product.trim().to_string(),
            industry: self.industry.trim().to_string(),
            audience: self.audience.trim().to_string(),
        }
    }
}

/// Trimmed, non-empty template arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    product: String,
    industry: String,
    audience: String,
}

impl ValidatedInputs {
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }
}
