//! DTOs for registry API payloads that do not map one-to-one onto domain
//! records.

use serde::Deserialize;

use crate::domain::Module;

/// Envelope returned by `GET /api/v1/modules/mine`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ModulesEnvelopeDto {
    #[serde(default)]
    modules: Option<Vec<Module>>,
}

impl ModulesEnvelopeDto {
    pub(super) fn into_modules(self) -> Vec<Module> {
        self.modules.unwrap_or_default()
    }
}
