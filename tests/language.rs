use std::fs;

use hrl::{
    error::{Error, RuntimeError},
    interpreter::console::Console,
    parse_program, run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_parse() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "hrl")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = parse_program(&content) {
            panic!("Demo {path:?} failed to parse:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn demo_programs_run() {
    assert_eq!(run_file("demos/functions.hrl", "", 1), "3628800\n3\n");
    assert_eq!(run_file("demos/shapes.hrl", "", 1),
               "2\ncorner at 3,4\n11\n[0.5, 1.25]\n");
    assert_eq!(run_file("demos/counter.hrl", "", 10), "tick 5\ntick 10\n");
    assert_eq!(run_file("demos/input.hrl", "4 6\n-1", 3),
               "total = 4\ntotal = 10\ntotal = 9\n");
}

fn run_file(path: &str, input: &str, iterations: u64) -> String {
    let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    output_of(&source, input, iterations).unwrap_or_else(|e| panic!("{path} failed: {e}"))
}

fn output_of(src: &str, input: &str, iterations: u64) -> Result<String, Error> {
    let (console, output) = Console::captured(input);
    run_source(src, console, Some(iterations))?;
    let bytes = output.lock().unwrap().clone();
    Ok(String::from_utf8(bytes).unwrap())
}

/// Runs `body` as the `setup` block with an empty `main`.
fn setup_output(body: &str) -> Result<String, Error> {
    output_of(&format!("setup {{\n{body}\n}} main {{ }}"), "", 1)
}

fn assert_prints(body: &str, expected: &str) {
    match setup_output(body) {
        Ok(output) => assert_eq!(output, expected, "script:\n{body}"),
        Err(e) => panic!("Script failed: {e}\n{body}"),
    }
}

fn assert_failure(body: &str) -> Error {
    match setup_output(body) {
        Ok(output) => panic!("Script succeeded but was expected to fail; printed {output:?}"),
        Err(e) => e,
    }
}

fn assert_runtime_failure(body: &str) -> RuntimeError {
    match assert_failure(body) {
        Error::Runtime(e) => e,
        other => panic!("expected a runtime error, got {other}"),
    }
}

#[test]
fn integer_division_truncates() {
    assert_prints("print(7 / 2); print(-7 / 2); print(7 % 3); print(-7 % 3); print(7 % -3);",
                  "3\n-3\n1\n-1\n1\n");
    assert_prints("print(7.9 / 2);", "3\n");
}

#[test]
fn division_by_zero_is_fatal() {
    assert!(matches!(assert_runtime_failure("print(1 / 0);"),
                     RuntimeError::DivisionByZero { line: 2 }));
    assert!(matches!(assert_runtime_failure("print(1 % 0);"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn concatenation_accepts_any_scalar() {
    assert_prints("print(1 .. \"x\");", "1x\n");
    assert_prints("print(\"a\" .. 2.5 .. (1 < 2));", "a2.5000001\n");
    assert_prints("x : double = 0.1; print(x); print(\"x=\" .. x);", "0.1\nx=0.100000\n");
    assert_prints("print(1 + 2 .. 3 * 4);", "312\n");
}

#[test]
fn right_operand_is_evaluated_first() {
    let program = "setup {\nprint(read() - read());\nx : int = print(1) + print(2);\n} main { }";
    assert_eq!(output_of(program, "10 3", 1).unwrap(), "-7\n2\n1\n");
}

#[test]
fn comparisons() {
    assert_prints("print(\"apple\" < \"banana\");", "1\n");
    assert_prints("print(5 == 5.0);", "1\n");
    assert_prints("print(5 != 5.7);", "0\n");
    assert_prints("print(2 >= 3);", "0\n");
    assert!(matches!(assert_runtime_failure("print(\"5\" == 5);"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn logical_operators_use_truthiness() {
    assert_prints("print(1 and 2); print(0 or 0); print(not (1 < 2));", "1\n0\n0\n");
    assert_prints("print(1 && 0 || 3);", "1\n");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert!(matches!(assert_runtime_failure("print(0 and 1 / 0);"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn unary_operators() {
    assert_prints("x : int = 4; print(-x); print(+x); print(- -x);", "-4\n4\n4\n");
    assert_prints("print(-1.5);", "-1.5\n");
    assert!(matches!(assert_runtime_failure("print(-\"a\");"),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("print(not 1);"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn functions_do_not_see_globals() {
    let error = assert_runtime_failure("x : int = 5;\nfunction f() { return x; }\nprint(f());");
    assert!(matches!(error, RuntimeError::UnknownVariable { ref name, line: 3 } if name == "x"));
}

#[test]
fn functions_return_values() {
    assert_prints("function square(n) { return n * n; }\nprint(square(7));", "49\n");
    assert_prints("function greet(who) { return \"hi \" .. who; }\nprint(greet(\"bob\"));",
                  "hi bob\n");
}

#[test]
fn enum_values_are_ordinals() {
    assert_prints("enum Color { RED, GREEN, BLUE }\nprint(Color::GREEN);", "1\n");
    assert!(matches!(assert_runtime_failure("enum Color { RED }\nprint(Color::PINK);"),
                     RuntimeError::UnknownEnumValue { .. }));
    assert!(matches!(assert_runtime_failure("print(Shape::SQUARE);"),
                     RuntimeError::UnknownEnum { .. }));
}

#[test]
fn setup_runs_once_and_main_repeats() {
    let output = output_of("setup { const a = 3; const b = 4; } main { print(a+b); }", "", 3);
    assert_eq!(output.unwrap(), "7\n7\n7\n");

    let output = output_of("setup { print(\"setup\"); n : int = 0; } main { n = n + 1; print(n); }",
                           "",
                           2);
    assert_eq!(output.unwrap(), "setup\n1\n2\n");
}

/// `break` ends only the block it appears in. Here that is the `if` body, so
/// the loop keeps going and re-tests its condition; the loop only ends when
/// `i` reaches 4.
#[test]
fn break_ends_only_the_enclosing_block() {
    assert_prints("i : int = 0;
                   while i < 4 {
                       i = i + 1;
                       if i == 2 { break; print(\"unreachable\"); }
                       print(i);
                   }
                   print(\"done\");",
                  "1\n2\n3\n4\ndone\n");
}

/// A `continue` at the top level of a loop body skips the rest of the body.
#[test]
fn continue_skips_rest_of_body() {
    assert_prints("i : int = 0;
                   while i < 3 {
                       i = i + 1;
                       continue;
                       print(i);
                   }
                   print(i);",
                  "3\n");
}

#[test]
fn arrays() {
    assert_prints("const xs = [1,2,3]; print(xs[1]);", "2\n");
    assert_prints("names : strings = [\"a\", \"b\"]; print(names[0] .. names[1]);", "ab\n");
    assert_prints("const xs = [1, 2]; print(xs);", "[1, 2]\n");
    assert!(matches!(assert_runtime_failure("const xs = [1,2,3]; print(xs[3]);"),
                     RuntimeError::IndexOutOfBounds { index: 3,
                                                      len: 3,
                                                      .. }));
    assert!(matches!(assert_runtime_failure("const xs = [1, \"a\"];"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn structs() {
    assert_prints("struct Point { int x, int y }
                   p : Point;
                   p.x = 2;
                   print(p.x + p.y);",
                  "2\n");
    assert!(matches!(assert_runtime_failure("struct Point { int x }\np : Point;\np.z = 1;"),
                     RuntimeError::UnknownField { line: 4, .. }));
    assert!(matches!(assert_runtime_failure("print(q.x);"),
                     RuntimeError::UnknownStructInstance { .. }));
}

#[test]
fn doubles_print_like_printf() {
    assert_prints("print(2.50); print(1.0); print(1234567.0); print(0.0001);",
                  "2.5\n1\n1.23457e+06\n0.0001\n");
}

#[test]
fn else_if_chains() {
    assert_prints("function sign(n) {
                       s : int = 0;
                       if n < 0 { s = -1; } else if n > 0 { s = 1; } else { s = 0; }
                       return s;
                   }
                   print(sign(-9)); print(sign(0)); print(sign(4));",
                  "-1\n0\n1\n");
}

#[test]
fn read_takes_integers_from_input() {
    let output = output_of("setup { a : int = read(); b : int = read(); print(a * b); } main { }",
                           "6\n  7",
                           1);
    assert_eq!(output.unwrap(), "42\n");

    let result = output_of("setup { a : int = read(); } main { }", "seven", 1);
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::InvalidInput { .. }))));
}

#[test]
fn missing_values_are_rejected() {
    assert!(matches!(assert_runtime_failure("function f() { }\nx : int = f();"),
                     RuntimeError::MissingValue { .. }));
}

#[test]
fn threadloop_failures_stop_the_program() {
    let source = "setup { zero : int = 0; threadloop bad(zero) { x : int = 1 / zero; } }
                  main { }";
    let (console, _) = Console::captured("");
    let result = run_source(source, console, None);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::ThreadLoopFailed { ref name, .. }))
                     if name == "bad"));
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_program("setup { } main { } extra"), Err(Error::Parse(_))));
    assert!(matches!(parse_program("setup { x = 1 } main { }"), Err(Error::Parse(_))));
    assert!(matches!(parse_program("main { }"), Err(Error::Parse(_))));
    assert!(matches!(parse_program("setup { function read() { } } main { }"),
                     Err(Error::Parse(_))));
}

#[test]
fn lexical_errors() {
    assert!(matches!(parse_program(""), Err(Error::Lex(_))));
    assert!(matches!(parse_program("setup { x = \"open; } main { }"), Err(Error::Lex(_))));
    assert!(matches!(parse_program("setup { x = 1 $ 2; } main { }"), Err(Error::Lex(_))));
}

#[test]
fn comments_are_ignored() {
    assert_prints("// leading\nprint(1); // trailing\n// last", "1\n");
}
