use crate::config::RPConfig;
use rect_pack::io::ext_repr::{ExtDirectionSolution, ExtInstance, ExtPackSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtPackSolution,
    pub config: RPConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DirectionOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtDirectionSolution,
    pub config: RPConfig,
}
