use serde::{Deserialize, Serialize};

use crate::paper::PaperConfig;
use crate::tile::TileConfig;

/// Everything needed to lay out one sheet, as stored in TOML settings files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub paper: PaperConfig,
    #[serde(default)]
    pub tile: TileConfig,
}
