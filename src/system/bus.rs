//! Channels between the curve workers and the thread that owns the sliders.

use crate::models::curve::{CurveError, CurveResult, SliderSpec};
use crossbeam_channel::{Receiver, Sender, unbounded};

/// A slider waiting to be built, tagged with the caller's identifier.
#[derive(Debug, Clone)]
pub struct CurveJob {
    pub id: usize,
    pub spec: SliderSpec,
}

/// Messages sent to the worker threads.
#[derive(Debug, Clone)]
pub enum CurveCommand {
    /// Build one curve and report it on the result channel.
    Build(CurveJob),
    /// Stop the receiving worker.
    Shutdown,
}

/// The outcome of one job. A failure affects this slider only.
#[derive(Debug, Clone)]
pub struct CurveOutput {
    pub id: usize,
    pub result: Result<CurveResult, CurveError>,
}

/// Job and result channels of a pool of curve workers.
///
/// The owner keeps `command_tx` and `output_rx`; each worker gets clones of
/// the other two ends.
pub struct CurveBus {
    /// Owner → workers: jobs and shutdown requests.
    pub command_tx: Sender<CurveCommand>,
    pub command_rx: Receiver<CurveCommand>,

    /// Workers → owner: finished curves.
    pub output_tx: Sender<CurveOutput>,
    pub output_rx: Receiver<CurveOutput>,
}

impl CurveBus {
    pub fn new() -> Self {
        let (command_tx, command_rx) = unbounded();
        let (output_tx, output_rx) = unbounded();

        Self {
            command_tx,
            command_rx,
            output_tx,
            output_rx,
        }
    }
}

impl Default for CurveBus {
    fn default() -> Self {
        Self::new()
    }
}
