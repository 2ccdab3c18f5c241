use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread,
};

use log::{debug, error};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        utils::lock,
    },
};

/// Shared bookkeeping for every threadloop of a program run.
///
/// Threadloops have no way to report back directly, so a failing loop parks
/// its error here and the main loop picks it up at its next iteration
/// boundary. The stop flag lets an embedding end a bounded run without
/// leaving loops spinning behind it.
#[derive(Debug, Default)]
pub struct Supervisor {
    stop:    AtomicBool,
    running: AtomicUsize,
    failure: Mutex<Option<RuntimeError>>,
}

impl Supervisor {
    /// Asks every threadloop to exit after its current iteration.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`Supervisor::request_stop`] was called.
    #[must_use]
    pub fn stop_requested(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Number of threadloops currently executing.
    #[must_use]
    pub fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    /// Records a failure. Only the first one is kept.
    pub fn record_failure(&self, failure: RuntimeError) {
        let mut slot = lock(&self.failure);
        if slot.is_none() {
            *slot = Some(failure);
        }
    }

    /// Removes and returns the recorded failure, if any.
    pub fn take_failure(&self) -> Option<RuntimeError> {
        lock(&self.failure).take()
    }
}

impl Context {
    /// Starts a threadloop.
    ///
    /// The body runs forever on its own thread, sharing this context's frame
    /// and registry with the spawning thread. Every parameter must name a
    /// variable or struct instance that exists when the loop starts.
    ///
    /// # Errors
    /// - `UnknownVariable` for a parameter that is not bound.
    /// - `ThreadSpawnFailed` if the thread cannot be created.
    pub fn spawn_threadloop(&self,
                            name: &str,
                            params: &[String],
                            body: &Arc<Block>,
                            line: usize)
                            -> EvalResult<()> {
        {
            let frame = lock(&self.frame);
            if let Some(missing) = params.iter().find(|p| !frame.contains(p)) {
                return Err(RuntimeError::UnknownVariable { name: missing.clone(),
                                                           line });
            }
        }

        let context = self.clone();
        let body = Arc::clone(body);
        let loop_name = name.to_string();

        self.supervisor.running.fetch_add(1, Ordering::SeqCst);
        let spawned = thread::Builder::new().name(format!("threadloop-{name}"))
                                            .spawn(move || context.run_threadloop(&loop_name, &body));

        if let Err(e) = spawned {
            self.supervisor.running.fetch_sub(1, Ordering::SeqCst);
            return Err(RuntimeError::ThreadSpawnFailed { name: name.to_string(),
                                                         details: e.to_string(),
                                                         line });
        }

        debug!("line {line}: started threadloop '{name}'");
        Ok(())
    }

    /// Body of a threadloop thread.
    fn run_threadloop(&self, name: &str, body: &Block) {
        while !self.supervisor.stop_requested() {
            if let Err(e) = self.exec_block(body) {
                error!("threadloop '{name}' stopped: {e}");
                self.supervisor
                    .record_failure(RuntimeError::ThreadLoopFailed { name:   name.to_string(),
                                                                     source: Box::new(e), });
                break;
            }
            thread::yield_now();
        }
        self.supervisor.running.fetch_sub(1, Ordering::SeqCst);
        debug!("threadloop '{name}' exited");
    }

    /// Surfaces a parked threadloop failure as an error.
    pub fn check_threadloops(&self) -> EvalResult<()> {
        self.supervisor.take_failure().map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::interpreter::{console::Console, parser::core::parse_script, value::core::Value};

    fn wait_until(condition: impl Fn() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !condition() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn parameters_must_exist() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let block = parse_script("threadloop t(missing) { }").unwrap();
        assert!(matches!(context.exec_block(&block),
                         Err(RuntimeError::UnknownVariable { ref name, .. }) if name == "missing"));
        assert_eq!(context.supervisor.running(), 0);
    }

    #[test]
    fn failures_are_parked() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let block = parse_script("d : int = 0; threadloop t(d) { x : int = 1 / d; }").unwrap();
        context.exec_block(&block).unwrap();

        wait_until(|| context.supervisor.running() == 0);

        match context.check_threadloops() {
            Err(RuntimeError::ThreadLoopFailed { name, source }) => {
                assert_eq!(name, "t");
                assert_eq!(*source, RuntimeError::DivisionByZero { line: 1 });
            },
            other => panic!("unexpected {other:?}"),
        }
        assert!(context.check_threadloops().is_ok());
    }

    #[test]
    fn loops_share_the_frame_and_stop_on_request() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let block = parse_script("n : int = 0; threadloop counter(n) { n = n + 1; }").unwrap();
        context.exec_block(&block).unwrap();

        wait_until(|| context.get_variable("n", 1).unwrap() != Value::Integer(0));
        context.supervisor.request_stop();
        wait_until(|| context.supervisor.running() == 0);

        assert_eq!(context.supervisor.running(), 0);
        assert!(context.get_variable("n", 1).unwrap().coerce_to_integer(1).unwrap() > 0);
    }
}
