use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::anchors::AnchorTable;
use crate::gamut::GamutLimits;
use crate::yellow::YellowCorrection;

static DEFAULT: Lazy<Arc<EngineConfig>> = Lazy::new(|| Arc::new(EngineConfig::default()));

/// Everything the engine reads besides its inputs.
///
/// Built once and shared; nothing in here is mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub anchors: AnchorTable,
    pub gamut: GamutLimits,
    pub yellow: YellowCorrection,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            anchors: AnchorTable::builtin().clone(),
            gamut: GamutLimits::default(),
            yellow: YellowCorrection::default(),
        }
    }
}

impl EngineConfig {
    /// The process-wide default configuration.
    pub fn shared() -> Arc<EngineConfig> {
        Arc::clone(&DEFAULT)
    }

    pub fn with_anchors(self, anchors: AnchorTable) -> Self {
        EngineConfig { anchors, ..self }
    }
}
