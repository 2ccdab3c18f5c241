use std::process::Command;

use log::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Exit code reported when the child was terminated by a signal.
pub const SIGNALED_EXIT_CODE: i64 = -1;

/// Builds the command that runs `program`.
///
/// - `*.py` runs through `python`.
/// - `*.lua` runs through `lua`.
/// - Anything else is executed from the working directory as `./program`.
#[must_use]
pub fn command_for(program: &str) -> Command {
    let interpreter = if program.ends_with(".py") {
        Some("python")
    } else if program.ends_with(".lua") {
        Some("lua")
    } else {
        None
    };

    match interpreter {
        Some(interpreter) => {
            let mut command = Command::new(interpreter);
            command.arg(program);
            command
        },
        None => Command::new(format!("./{program}")),
    }
}

/// Runs an external program and waits for it to exit.
///
/// The first argument names the program; every further argument is passed
/// in its text form as one command-line argument. The child inherits the
/// interpreter's standard streams.
///
/// # Errors
/// - `TypeError` if the program name is not a string.
/// - `ProcessFailed` if the program cannot be started.
///
/// # Returns
/// The child's exit code, or `-1` if it was killed by a signal.
pub fn callprogram(_context: &Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let Some((Value::String(program), rest)) = args.split_first() else {
        let found = args.first().map_or("nothing", Value::type_name);
        return Err(RuntimeError::TypeError { details: format!("callprogram expects a program \
                                                               name string, found {found}"),
                                             line });
    };

    let mut command = command_for(program);
    command.args(rest.iter().map(ToString::to_string));
    debug!("line {line}: running {command:?}");

    let status = command.status()
                        .map_err(|e| RuntimeError::ProcessFailed { program: program.clone(),
                                                                   details: e.to_string(),
                                                                   line })?;

    Ok(Value::Integer(status.code().map_or(SIGNALED_EXIT_CODE, i64::from)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::console::Console;

    #[test]
    fn interpreter_follows_suffix() {
        assert_eq!(command_for("tool.py").get_program(), "python");
        assert_eq!(command_for("tool.lua").get_program(), "lua");
        assert_eq!(command_for("tool").get_program(), "./tool");
        let command = command_for("a.py");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["a.py"]);
    }

    #[test]
    fn program_name_must_be_a_string() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        assert!(matches!(callprogram(&context, &[Value::Integer(1)], 5),
                         Err(RuntimeError::TypeError { line: 5, .. })));
    }

    #[test]
    fn missing_program_is_reported() {
        let (console, _) = Console::captured("");
        let context = Context::new(console);
        let result = callprogram(&context, &["no-such-program-here".into()], 2);
        assert!(matches!(result, Err(RuntimeError::ProcessFailed { line: 2, .. })));
    }
}
