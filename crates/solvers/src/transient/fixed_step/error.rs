use std::error::Error as StdError;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error while computing step {step} from t = {time}")]
    Model {
        step: usize,
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite state at step {step} (t = {time})")]
    NonFiniteState { step: usize, time: f64 },
}

impl Error {
    pub(crate) fn model<E>(step: usize, time: f64, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Model {
            step,
            time,
            source: Box::new(err),
        }
    }
}
