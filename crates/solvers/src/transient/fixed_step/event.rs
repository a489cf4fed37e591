/// Event emitted by the fixed-step solver for each grid point.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S> {
    /// The step number, which is also the grid index.
    pub step: usize,

    /// Grid time of this state.
    pub time: f64,

    /// State at this grid point.
    pub state: &'a S,
}
