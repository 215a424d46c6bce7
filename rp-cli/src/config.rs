use rect_pack::io::svg::SvgDrawOptions;
use rect_pack::util::{DirectionConfig, PackConfig};
use serde::{Deserialize, Serialize};

/// Configuration of the runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct RPConfig {
    /// Configuration of the packing engine, used in pack mode
    pub pack_config: PackConfig,
    /// Configuration of the major direction finder, used in direction mode
    pub direction_config: DirectionConfig,
    /// Optional SVG drawing options
    pub svg_draw_options: SvgDrawOptions,
}
