//! Hand-off to the rendering collaborator.

use globe_model::{ActiveDataset, ValueMap};

/// Receives the complete value map after every propagated change. Each call
/// replaces whatever the sink showed before.
pub trait RenderSink {
    fn present(&mut self, dataset: ActiveDataset, values: &ValueMap);
}

impl<F> RenderSink for F
where
    F: FnMut(ActiveDataset, &ValueMap),
{
    fn present(&mut self, dataset: ActiveDataset, values: &ValueMap) {
        self(dataset, values);
    }
}
