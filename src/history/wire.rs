use serde::Deserialize;

use crate::core::wire::Envelope;

use super::model::Chart;

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<Envelope<Chart>>,
}
