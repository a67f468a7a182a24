use serde::{Deserialize, Serialize};

use crate::rules::RulesConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: Option<RulesConfig>,
}
