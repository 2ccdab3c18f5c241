/// Represents all errors that can occur during evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an undefined function.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced an enum that was never declared.
    #[error("Error on line {line}: Undefined enum '{name}'.")]
    UnknownEnum {
        /// The enum name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a member the enum does not have.
    #[error("Error on line {line}: Undefined enum value '{enum_name}::{value_name}'.")]
    UnknownEnumValue {
        /// The enum name.
        enum_name:  String,
        /// The missing member.
        value_name: String,
        /// The source line where the error occurred.
        line:       usize,
    },
    /// Referenced a struct instance that does not exist in this scope.
    #[error("Error on line {line}: Undefined struct instance '{name}'.")]
    UnknownStructInstance {
        /// The instance name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a field the struct definition does not declare.
    #[error("Error on line {line}: Struct instance '{instance}' has no field '{field}'.")]
    UnknownField {
        /// The instance name.
        instance: String,
        /// The missing field.
        field:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted to declare a function that already exists.
    #[error("Error on line {line}: Function '{name}' is already declared.")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition did not evaluate to a boolean.
    #[error("Error on line {line}: Expected boolean condition, found {found}.")]
    ExpectedBoolean {
        /// Type name of the value found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Division or remainder by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} arguments, but {found} were given.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Number of parameters declared.
        expected: String,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression that yields no value was used where a value is required.
    #[error("Error on line {line}: Expression does not produce a value.")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Array access outside `0..len`.
    #[error("Error on line {line}: Index {index} out of bounds for array of length {len}.")]
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The array length.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `read()` could not obtain an integer from standard input.
    #[error("Error on line {line}: Invalid input: {details}.")]
    InvalidInput {
        /// What went wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Writing to standard output failed.
    #[error("Error on line {line}: Failed to write output: {details}.")]
    OutputFailed {
        /// The operating system error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `callprogram` could not start the external process.
    #[error("Error on line {line}: Failed to run '{program}': {details}.")]
    ProcessFailed {
        /// The program that was invoked.
        program: String,
        /// The operating system error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The operating system refused to start a threadloop thread.
    #[error("Error on line {line}: Could not start threadloop '{name}': {details}.")]
    ThreadSpawnFailed {
        /// The threadloop name.
        name:    String,
        /// The operating system error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A background threadloop aborted with an error.
    #[error("Threadloop '{name}' failed: {source}")]
    ThreadLoopFailed {
        /// The threadloop name.
        name:   String,
        /// The error that stopped it.
        source: Box<Self>,
    },
}
