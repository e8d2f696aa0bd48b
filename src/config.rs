//! Runtime configuration of a step invocation.

use crate::error::Result;

/// Thread configuration for a step.
///
/// With `threads: None` the rayon global pool is used, which honours `RAYON_NUM_THREADS`
/// or defaults to the number of logical CPUs. With `Some(t)` the invocation runs inside a
/// dedicated pool of t threads that is dropped when the step returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepConfig {
    pub threads: Option<usize>,
}

impl StepConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self { threads: Some(threads) }
    }

    /// Run `op` on the configured pool.
    pub fn install<OP, R>(&self, op: OP) -> Result<R>
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match self.threads {
            None => Ok(op()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
                Ok(pool.install(op))
            }
        }
    }
}
