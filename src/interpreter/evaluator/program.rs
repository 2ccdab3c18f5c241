use log::{debug, trace};

use crate::{
    ast::Program,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Runs a program.
    ///
    /// `setup` runs once, then `main` runs repeatedly. Without an iteration
    /// limit the loop only ends on an error. A failed threadloop is reported
    /// before the next `main` iteration starts.
    ///
    /// When this returns, every threadloop has been asked to stop.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    /// - `iterations`: Maximum number of `main` iterations, or `None`.
    ///
    /// # Example
    /// ```
    /// use hrl::{
    ///     interpreter::{console::Console, evaluator::core::Context},
    ///     parse_program,
    /// };
    ///
    /// let program = parse_program("setup { const a = 3; const b = 4; } main { print(a + b); }").unwrap();
    /// let (console, output) = Console::captured("");
    ///
    /// Context::new(console).run_program(&program, Some(2)).unwrap();
    /// assert_eq!(output.lock().unwrap().as_slice(), b"7\n7\n");
    /// ```
    pub fn run_program(&self, program: &Program, iterations: Option<u64>) -> EvalResult<()> {
        let result = self.drive(program, iterations);
        self.supervisor.request_stop();
        result
    }

    fn drive(&self, program: &Program, iterations: Option<u64>) -> EvalResult<()> {
        debug!("running setup");
        self.exec_block(&program.setup)?;

        debug!("entering main loop");
        let mut completed: u64 = 0;
        while iterations.is_none_or(|limit| completed < limit) {
            self.check_threadloops()?;
            trace!("main iteration {completed}");
            self.exec_block(&program.main)?;
            completed += 1;
        }

        debug!("main loop finished after {completed} iterations");
        self.check_threadloops()
    }
}
