//! Worker threads that build slider curves in parallel.
//!
//! Each job is a pure function of its [`SliderSpec`], so workers share
//! nothing but the channels. Dropping the pool stops the workers; results
//! that were never received are simply discarded.

use super::bus::{CurveBus, CurveCommand, CurveJob, CurveOutput};
use crate::models::curve::{CurveError, CurveResult, SliderSpec};
use crate::models::settings::CurveSettings;
use crossbeam_channel::{Receiver, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

pub struct CurvePool {
    command_tx: Sender<CurveCommand>,
    /// Disconnects once every worker has exited; the pool holds no output sender.
    output_rx: Receiver<CurveOutput>,
    workers: Vec<JoinHandle<()>>,
}

impl CurvePool {
    /// Spawns `settings.worker_count()` workers.
    pub fn new(settings: CurveSettings) -> Self {
        Self::with_workers(settings, settings.worker_count())
    }

    pub fn with_workers(settings: CurveSettings, count: usize) -> Self {
        let CurveBus {
            command_tx,
            command_rx,
            output_tx,
            output_rx,
        } = CurveBus::new();
        let mut workers = Vec::with_capacity(count);

        for index in 0..count.max(1) {
            let commands = command_rx.clone();
            let outputs = output_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("Curve Worker {}", index))
                .spawn(move || {
                    run_worker(commands, outputs, |spec| CurveResult::build(spec, &settings))
                });

            match spawned {
                Ok(handle) => workers.push(handle),
                Err(e) => log::error!("POOL: failed to spawn curve worker {}: {}", index, e),
            }
        }

        log::debug!("POOL: {} curve worker(s) started", workers.len());
        Self {
            command_tx,
            output_rx,
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Queues a slider. Returns `false` if no worker can take it.
    pub fn submit(&self, id: usize, spec: SliderSpec) -> bool {
        if self.workers.is_empty() {
            return false;
        }
        self.command_tx
            .send(CurveCommand::Build(CurveJob { id, spec }))
            .is_ok()
    }

    /// Finished curves, in completion order.
    pub fn results(&self) -> &Receiver<CurveOutput> {
        &self.output_rx
    }

    /// Stops all workers after the jobs already queued.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        for _ in 0..self.workers.len() {
            let _ = self.command_tx.send(CurveCommand::Shutdown);
        }
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("POOL: a curve worker panicked");
            }
        }
    }
}

impl Drop for CurvePool {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Serves jobs until shutdown. A panicking build is reported as that slider's error.
fn run_worker<F>(commands: Receiver<CurveCommand>, outputs: Sender<CurveOutput>, build: F)
where
    F: Fn(&SliderSpec) -> Result<CurveResult, CurveError>,
{
    while let Ok(command) = commands.recv() {
        match command {
            CurveCommand::Build(job) => {
                let result = panic::catch_unwind(AssertUnwindSafe(|| build(&job.spec)))
                    .unwrap_or_else(|payload| {
                        Err(CurveError::BuildPanicked(panic_message(payload.as_ref())))
                    });
                if let Err(e) = &result {
                    log::warn!("POOL: slider {} failed: {}", job.id, e);
                }
                if outputs.send(CurveOutput { id: job.id, result }).is_err() {
                    break;
                }
            }
            CurveCommand::Shutdown => break,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Builds every spec on a temporary pool and returns the results in input order.
///
/// Any result a worker failed to deliver is built on the calling thread.
pub fn build_all(
    specs: &[SliderSpec],
    settings: &CurveSettings,
) -> Vec<Result<CurveResult, CurveError>> {
    if specs.is_empty() {
        return Vec::new();
    }

    let workers = settings.worker_count().min(specs.len());
    let pool = CurvePool::with_workers(*settings, workers);

    let mut submitted = 0;
    for (id, spec) in specs.iter().enumerate() {
        if pool.submit(id, spec.clone()) {
            submitted += 1;
        }
    }

    let mut slots: Vec<Option<Result<CurveResult, CurveError>>> = vec![None; specs.len()];
    for _ in 0..submitted {
        match pool.results().recv() {
            Ok(output) => slots[output.id] = Some(output.result),
            Err(_) => break,
        }
    }
    pool.shutdown();

    let results: Vec<_> = slots
        .into_iter()
        .zip(specs)
        .map(|(slot, spec)| slot.unwrap_or_else(|| CurveResult::build(spec, settings)))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    log::info!(
        "POOL: built {} curve(s) on {} worker(s), {} failed",
        results.len(),
        workers,
        failed
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curve::{AnchorPoint, PathTypeHint};

    fn line(length: f64, nominal_length: f64) -> SliderSpec {
        let anchors = [AnchorPoint::new(0.0, 0.0), AnchorPoint::new(length, 0.0)];
        SliderSpec::from_anchors(&anchors, PathTypeHint::Linear, 1, nominal_length).unwrap()
    }

    #[test]
    fn test_build_all_preserves_order() {
        let specs: Vec<SliderSpec> = (1..=40)
            .map(|i| line(i as f64 * 5.0, i as f64 * 5.0))
            .collect();
        let settings = CurveSettings {
            workers: 4,
            ..CurveSettings::default()
        };

        let results = build_all(&specs, &settings);
        assert_eq!(results.len(), 40);
        for (i, result) in results.iter().enumerate() {
            let curve = result.as_ref().unwrap();
            assert_eq!(curve.length(), (i + 1) as f64 * 5.0);
        }
    }

    #[test]
    fn test_bad_slider_does_not_affect_others() {
        let specs = vec![line(10.0, 10.0), line(10.0, -1.0), line(20.0, 20.0)];
        let settings = CurveSettings {
            workers: 2,
            ..CurveSettings::default()
        };

        let results = build_all(&specs, &settings);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(CurveError::InvalidNominalLength(-1.0)));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_pool_matches_inline_build() {
        let spec = line(33.0, 50.0);
        let settings = CurveSettings::default();
        let pool = CurvePool::with_workers(settings, 2);
        assert!(pool.submit(7, spec.clone()));

        let output = pool.results().recv().unwrap();
        assert_eq!(output.id, 7);
        assert_eq!(output.result, CurveResult::build(&spec, &settings));
        pool.shutdown();
    }

    #[test]
    fn test_panicking_build_reports_error_and_keeps_serving() {
        let bus = CurveBus::new();
        let commands = bus.command_rx.clone();
        let outputs = bus.output_tx.clone();
        let worker = thread::spawn(move || {
            run_worker(commands, outputs, |spec| {
                if spec.nominal_length > 100.0 {
                    panic!("slider too long");
                }
                CurveResult::build(spec, &CurveSettings::default())
            })
        });

        for (id, spec) in [line(10.0, 500.0), line(10.0, 10.0)].into_iter().enumerate() {
            bus.command_tx
                .send(CurveCommand::Build(CurveJob { id, spec }))
                .unwrap();
        }
        bus.command_tx.send(CurveCommand::Shutdown).unwrap();

        let first = bus.output_rx.recv().unwrap();
        assert_eq!(first.id, 0);
        assert_eq!(
            first.result,
            Err(CurveError::BuildPanicked("slider too long".to_string()))
        );
        let second = bus.output_rx.recv().unwrap();
        assert_eq!(second.id, 1);
        assert!(second.result.is_ok());
        assert!(worker.join().is_ok());
    }

    #[test]
    fn test_results_disconnect_when_workers_exit() {
        let pool = CurvePool::with_workers(CurveSettings::default(), 2);
        for _ in 0..pool.worker_count() {
            pool.command_tx.send(CurveCommand::Shutdown).unwrap();
        }
        // Only worker threads hold output senders, so this cannot block forever.
        assert!(pool.results().recv().is_err());
    }

    #[test]
    fn test_empty_batch() {
        assert!(build_all(&[], &CurveSettings::default()).is_empty());
    }
}
