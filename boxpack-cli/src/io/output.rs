use boxpack::io::ext_repr::{ExtContainerPackingResult, ExtPackingRequest};
use boxpack::util::PackingConfig;
use serde::{Deserialize, Serialize};

/// Contents of a solution file: the request, its results and the configuration used to obtain them
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackingOutput {
    #[serde(flatten)]
    pub request: ExtPackingRequest,
    pub results: Vec<ExtContainerPackingResult>,
    pub config: PackingConfig,
}
