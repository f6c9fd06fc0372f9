use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

use crate::checking::checker::CheckTarget;
use crate::core::constants::{error_messages, workers};
use crate::core::types::{Outcome, Target};
use crate::ui::progress::ProgressReporter;

type SharedReceiver = Arc<Mutex<mpsc::Receiver<Target>>>;

/// Fixed-size pool of workers that checks every target exactly once.
///
/// Both queues are sized to the number of targets, so no producer ever waits
/// on capacity. The result queue closes when the last worker drops its
/// sender, which only happens once that worker has drained the work queue.
pub struct WorkerPool {
    workers: usize,
    checker: Arc<dyn CheckTarget>,
}

impl WorkerPool {
    pub fn new(workers: usize, checker: Arc<dyn CheckTarget>) -> Self {
        Self {
            workers: workers.max(workers::MIN),
            checker,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Check all targets and return one outcome per target, in completion order.
    pub async fn run(
        &self,
        targets: Vec<Target>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Vec<Outcome> {
        let total = targets.len();
        if total == 0 {
            return Vec::new();
        }

        if let Some(ref mut prog) = progress {
            prog.start_checks(total);
        }

        // Filling
        let (work_tx, work_rx) = mpsc::channel::<Target>(total);
        for target in targets.iter().cloned() {
            if let Err(err) = work_tx.try_send(target) {
                log::error!("Could not enqueue target: {err}");
            }
        }
        drop(work_tx);

        // Draining
        let (result_tx, mut result_rx) = mpsc::channel::<Outcome>(total);
        let work_rx: SharedReceiver = Arc::new(Mutex::new(work_rx));
        let mut handles = JoinSet::new();
        for id in 0..self.workers {
            let checker = Arc::clone(&self.checker);
            let work_rx = Arc::clone(&work_rx);
            let result_tx = result_tx.clone();
            handles.spawn(run_worker(id, checker, work_rx, result_tx));
        }
        // Only the workers hold senders now
        drop(result_tx);

        // Collected
        let mut outcomes = Vec::with_capacity(total);
        while let Some(outcome) = result_rx.recv().await {
            crate::reporting::logging::log_outcome(&outcome);
            outcomes.push(outcome);
            if let Some(ref prog) = progress {
                prog.update_check_progress(outcomes.len());
            }
        }

        while let Some(joined) = handles.join_next().await {
            if let Err(err) = joined {
                log::error!("Worker terminated abnormally: {err}");
            }
        }

        if outcomes.len() != total {
            log::warn!(
                "Received {} outcome(s) for {} target(s), filling in the rest",
                outcomes.len(),
                total
            );
            fill_missing(&targets, &mut outcomes);
        }

        if let Some(ref prog) = progress {
            let ok_count = outcomes.iter().filter(|o| o.is_ok()).count();
            prog.finish_checks(ok_count, outcomes.len());
        }

        outcomes
    }
}

async fn run_worker(
    id: usize,
    checker: Arc<dyn CheckTarget>,
    work_rx: SharedReceiver,
    result_tx: mpsc::Sender<Outcome>,
) {
    log::debug!("Worker {id} started");
    let mut checked = 0usize;

    loop {
        // The lock is released before the check runs
        let next = { work_rx.lock().await.recv().await };
        let Some(target) = next else { break };

        let outcome = checker.check(&target).await;
        checked += 1;

        if result_tx.send(outcome).await.is_err() {
            log::error!("Worker {id} could not deliver outcome for {target}");
            break;
        }
    }

    log::debug!("Worker {id} stopped after {checked} check(s)");
}

/// Give every target that has no outcome a failed one, so that the number of
/// outcomes per target always matches its number of occurrences in the input.
fn fill_missing(targets: &[Target], outcomes: &mut Vec<Outcome>) {
    let mut received: HashMap<&str, usize> = HashMap::new();
    for outcome in outcomes.iter() {
        *received.entry(outcome.url()).or_default() += 1;
    }

    let mut missing = Vec::new();
    for target in targets {
        match received.get_mut(target.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => missing.push(Outcome::unreachable(
                target,
                error_messages::WORKER_TERMINATED.to_string(),
            )),
        }
    }

    outcomes.extend(missing);
}
