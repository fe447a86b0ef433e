use std::io::{self, Write};

use qurt::{
    error::{Error, RuntimeError},
    interpreter::{
        machine::core::{MAX_CALL_DEPTH, Machine},
        value::core::Value,
    },
    parse, run,
};

fn run_source(source: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(&mut out, "test.qurt", source.as_bytes())?;

    Ok(String::from_utf8(out).expect("output should be UTF-8"))
}

fn output(source: &str) -> String {
    run_source(source).unwrap_or_else(|e| panic!("program failed: {e}"))
}

fn runtime_error(source: &str) -> RuntimeError {
    match run_source(source) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

/// Wraps a function body into an entry point.
fn main_with(body: &str) -> String {
    format!("функция негізгі() ештеңе {{\n{body}\n}}\n")
}

fn machine(source: &str) -> Machine<Vec<u8>> {
    let decls = parse("test.qurt", source.as_bytes()).expect("program should parse");
    Machine::new(decls, Vec::new()).expect("program should load")
}

#[test]
fn functions_update_globals() {
    let mut machine = machine("
айнымалы x бүтін = 2
айнымалы y бүтін = 3
функция негізгі() ештеңе { x = x + y }
");
    machine.run().unwrap();

    assert_eq!(machine.global("x"), Some(&Value::Int(5)));
    assert_eq!(machine.global("y"), Some(&Value::Int(3)));
}

const ADD: &str = "
функция қосу(a бүтін, b бүтін) бүтін { қайтар a + b }
функция негізгі() ештеңе {}
";

#[test]
fn calling_a_function_returns_its_value() {
    let mut machine = machine(ADD);

    assert_eq!(machine.call("қосу", vec![Value::Int(2), Value::Int(3)]).unwrap(),
               Some(Value::Int(5)));
}

#[test]
fn mistyped_arguments_fail_at_the_operator() {
    let mut machine = machine(ADD);

    let err = machine.call("қосу", vec![Value::Int(2), Value::from("з")]).unwrap_err();
    assert!(matches!(err, RuntimeError::OperandTypeMismatch { ref left, ref right, line: 2, .. }
                         if left == "бүтін" && right == "жол"),
            "{err}");
}

#[test]
fn wrong_argument_count() {
    let mut machine = machine(ADD);

    assert!(matches!(machine.call("қосу", vec![Value::Int(2)]),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. })));
    assert!(matches!(machine.call("азайту", Vec::new()),
                     Err(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn for_loop_counts_up() {
    let source = main_with("қайтала (айнымалы i бүтін = 0; i < 3; i = i + 1) { жаз(i) }");

    assert_eq!(output(&source), "0\n1\n2\n");
}

#[test]
fn break_stops_the_loop() {
    let source = main_with("
қайтала (айнымалы i бүтін = 0; i < 10; i = i + 1) {
    егер (i == 2) { тоқта }
    жаз(i)
}
жаз(\"соңы\")
");

    assert_eq!(output(&source), "0\n1\nсоңы\n");
}

#[test]
fn continue_runs_the_post_step() {
    let source = main_with("
қайтала (айнымалы i бүтін = 0; i < 5; i = i + 1) {
    егер (i % 2 == 0) { өткіз }
    жаз(i)
}
");

    assert_eq!(output(&source), "1\n3\n");
}

#[test]
fn break_outside_a_loop_is_an_error() {
    assert!(matches!(runtime_error(&main_with("тоқта")),
                     RuntimeError::BreakOutsideLoop { line: 2 }));
    assert!(matches!(runtime_error(&main_with("егер (иә) { өткіз }")),
                     RuntimeError::ContinueOutsideLoop { line: 2 }));
}

#[test]
fn break_does_not_cross_function_calls() {
    let source = "
функция шық() ештеңе { тоқта }
функция негізгі() ештеңе {
    қайтала (айнымалы i бүтін = 0; i < 3; i = i + 1) { шық() }
}
";

    assert!(matches!(runtime_error(source), RuntimeError::BreakOutsideLoop { line: 2 }));
}

#[test]
fn return_leaves_nested_loops() {
    let source = "
функция табу(мақсат бүтін) бүтін {
    қайтала (айнымалы i бүтін = 0; i < 10; i = i + 1) {
        қайтала (айнымалы j бүтін = 0; j < 10; j = j + 1) {
            егер (i * j == мақсат) { қайтар i * 10 + j }
        }
    }
    қайтар -1
}
функция негізгі() ештеңе { жаз(табу(12), табу(1000)) }
";

    assert_eq!(output(source), "26 -1\n");
}

#[test]
fn running_twice_gives_identical_output() {
    let source = "
айнымалы санауыш бүтін
функция негізгі() ештеңе {
    санауыш = санауыш + 1
    жаз(\"санауыш\", санауыш)
}
";
    let decls = parse("test.qurt", source.as_bytes()).unwrap();

    let mut first = Machine::new(decls.clone(), Vec::new()).unwrap();
    let mut second = Machine::new(decls, Vec::new()).unwrap();
    first.run().unwrap();
    second.run().unwrap();
    assert_eq!(first.output(), second.output());

    // Globals start afresh on every run.
    first.run().unwrap();
    assert_eq!(first.into_output(), "санауыш 1\nсанауыш 1\n".as_bytes());
}

#[test]
fn print_formats_every_type() {
    let source = "
құрылым Нүкте { x бүтін; y бөлшек }
функция негізгі() ештеңе {
    айнымалы p Нүкте
    p.y = 1.5
    жаз(1, 2.5, \"жол\", иә, жоқ, {1, 2, 3}, p)
    жаз()
}
";

    assert_eq!(output(source), "1 2.5 жол иә жоқ [1 2 3] Нүкте{x: 0, y: 1.5}\n\n");
}

#[test]
fn blocks_scope_new_bindings_but_update_outer_ones() {
    let source = main_with("
айнымалы x бүтін = 1
егер (иә) {
    x = 2
    айнымалы y бүтін = 3
    жаз(x, y)
}
жаз(x)
");
    assert_eq!(output(&source), "2 3\n2\n");

    let leak = main_with("
егер (иә) { айнымалы y бүтін = 3 }
жаз(y)
");
    assert!(matches!(runtime_error(&leak),
                     RuntimeError::UnknownVariable { ref name, line: 4 } if name == "y"));
}

#[test]
fn inner_blocks_may_shadow() {
    let source = main_with("
айнымалы x бүтін = 1
егер (иә) {
    айнымалы x жол = \"ішкі\"
    жаз(x)
}
жаз(x)
");

    assert_eq!(output(&source), "ішкі\n1\n");
}

#[test]
fn redeclaring_in_the_same_scope_is_an_error() {
    let source = main_with("
айнымалы x бүтін
айнымалы x бүтін
");

    assert!(matches!(runtime_error(&source), RuntimeError::VariableExists { line: 4, .. }));
}

#[test]
fn functions_see_globals_but_not_callers() {
    let source = "
айнымалы g бүтін = 7
функция көру() бүтін { қайтар g }
функция жасырын() бүтін { қайтар жергілікті }
функция негізгі() ештеңе {
    айнымалы жергілікті бүтін = 1
    жаз(көру())
    жаз(жасырын())
}
";

    assert!(matches!(run_source(source),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { ref name, .. }))
                         if name == "жергілікті"));
}

#[test]
fn arrays_and_structs_are_assigned_in_place() {
    let source = "
құрылым Нүкте { x бүтін; y бүтін }
құрылым Фигура { нүктелер [2]Нүкте; аты жол }
функция негізгі() ештеңе {
    айнымалы ф Фигура
    ф.нүктелер[1].y = 5
    ф.аты = \"сызық\"
    жаз(ф)
}
";
    assert_eq!(output(source),
               "Фигура{нүктелер: [Нүкте{x: 0, y: 0} Нүкте{x: 0, y: 5}], аты: сызық}\n");
}

#[test]
fn values_are_copied_on_assignment() {
    let source = main_with("
айнымалы a [3]бүтін = {1, 2, 3}
айнымалы b [3]бүтін = a
b[0] = 9
жаз(a, b)
");

    assert_eq!(output(&source), "[1 2 3] [9 2 3]\n");
}

#[test]
fn stored_values_keep_their_type() {
    assert!(matches!(runtime_error(&main_with("айнымалы x бүтін = \"бес\"")),
                     RuntimeError::DeclarationTypeMismatch { ref expected, ref found, .. }
                         if expected == "бүтін" && found == "жол"));
    assert!(matches!(runtime_error(&main_with("айнымалы x бүтін\nx = 1.5")),
                     RuntimeError::AssignmentTypeMismatch { line: 3, .. }));
    assert!(matches!(runtime_error(&main_with("айнымалы a [2]бүтін\na = {1, 2, 3}")),
                     RuntimeError::AssignmentTypeMismatch { .. }));
    assert!(matches!(runtime_error(&main_with("айнымалы a [2]бүтін = {1, 2, 3}")),
                     RuntimeError::DeclarationTypeMismatch { .. }));
}

#[test]
fn array_literal_elements_share_a_type() {
    assert!(matches!(runtime_error(&main_with("жаз({1, \"екі\"})")),
                     RuntimeError::MixedArrayElements { ref expected, ref found, .. }
                         if expected == "бүтін" && found == "жол"));
    assert!(matches!(runtime_error(&main_with("жаз({{1}, {1, 2}})")),
                     RuntimeError::MixedArrayElements { .. }));
}

#[test]
fn index_errors() {
    assert!(matches!(runtime_error(&main_with("айнымалы a [2]бүтін\nжаз(a[2])")),
                     RuntimeError::IndexOutOfBounds { index: 2, len: 2, line: 3 }));
    assert!(matches!(runtime_error(&main_with("айнымалы a [2]бүтін\na[-1] = 0")),
                     RuntimeError::IndexOutOfBounds { index: -1, .. }));
    assert!(matches!(runtime_error(&main_with("айнымалы a бүтін\nжаз(a[0])")),
                     RuntimeError::ExpectedArray { .. }));
    assert!(matches!(runtime_error(&main_with("айнымалы a бүтін\nжаз(a.x)")),
                     RuntimeError::ExpectedStruct { .. }));
}

#[test]
fn return_values_are_checked() {
    let wrong_type = "
функция f() бүтін { қайтар \"бір\" }
функция негізгі() ештеңе { жаз(f()) }
";
    assert!(matches!(runtime_error(wrong_type),
                     RuntimeError::ReturnTypeMismatch { ref found, line: 2, .. } if found == "жол"));

    let missing = "
функция f() бүтін { }
функция негізгі() ештеңе { жаз(f()) }
";
    assert!(matches!(runtime_error(missing), RuntimeError::MissingReturnValue { .. }));

    let void_with_value = "
функция f() ештеңе { қайтар 1 }
функция негізгі() ештеңе { f() }
";
    assert!(matches!(runtime_error(void_with_value),
                     RuntimeError::ReturnTypeMismatch { .. }));
}

#[test]
fn void_calls_have_no_value() {
    let source = "
функция f() ештеңе { }
функция негізгі() ештеңе { айнымалы x бүтін = f() }
";

    assert!(matches!(runtime_error(source),
                     RuntimeError::NoValue { ref name, line: 3 } if name == "f"));
    assert!(matches!(runtime_error(&main_with("айнымалы x бүтін = жаз(1)")),
                     RuntimeError::NoValue { .. }));
}

#[test]
fn void_variables_are_rejected() {
    assert!(matches!(runtime_error(&main_with("айнымалы x ештеңе")),
                     RuntimeError::VoidValue { line: 2 }));
}

#[test]
fn operators_reject_mixed_and_unsupported_types() {
    assert!(matches!(runtime_error(&main_with("жаз(1 + 1.5)")),
                     RuntimeError::OperandTypeMismatch { .. }));
    assert!(matches!(runtime_error(&main_with("жаз(иә + жоқ)")),
                     RuntimeError::UnsupportedOperator { ref ty, .. } if ty == "логикалық"));
    assert!(matches!(runtime_error(&main_with("жаз(1 && 2)")),
                     RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(runtime_error(&main_with("жаз(-\"а\")")),
                     RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(runtime_error(&main_with("жаз({1} == {1})")),
                     RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(runtime_error(&main_with("жаз(1 < 2 < 3)")),
                     RuntimeError::OperandTypeMismatch { .. }));
}

#[test]
fn integer_arithmetic_is_checked() {
    assert!(matches!(runtime_error(&main_with("жаз(1 / 0)")),
                     RuntimeError::DivisionByZero { line: 2 }));
    assert!(matches!(runtime_error(&main_with("жаз(1 % 0)")),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error(&main_with("жаз(9223372036854775807 + 1)")),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error(&main_with("жаз(-9223372036854775807 - 2)")),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn arithmetic_results() {
    let source = main_with("
жаз(7 / 2, 7 % 3, -7 / 2, -7 % 3)
жаз(7.0 / 2.0, 7.5 % 2.0, 1.0 / 0.0)
жаз(\"ab\" + \"cd\", \"a\" < \"b\", \"b\" <= \"a\")
жаз(иә && жоқ, иә || жоқ, иә == жоқ, !жоқ)
");

    assert_eq!(output(&source), "3 1 -3 -1\n3.5 1.5 inf\nabcd иә жоқ\nжоқ иә жоқ иә\n");
}

#[test]
fn conditions_must_be_boolean() {
    assert!(matches!(runtime_error(&main_with("егер (1) { }")),
                     RuntimeError::NonBooleanCondition { ref found, line: 2 } if found == "бүтін"));
}

#[test]
fn recursion() {
    let source = "
функция фиб(n бүтін) бүтін {
    егер (n < 2) { қайтар n }
    қайтар фиб(n - 1) + фиб(n - 2)
}
функция негізгі() ештеңе { жаз(фиб(15)) }
";

    assert_eq!(output(source), "610\n");
}

#[test]
fn runaway_recursion_is_an_error() {
    let source = "
функция шексіз(n бүтін) бүтін { қайтар шексіз(n + 1) }
функция негізгі() ештеңе { жаз(шексіз(0)) }
";

    assert!(matches!(runtime_error(source),
                     RuntimeError::CallStackExhausted { depth: MAX_CALL_DEPTH, line: 2 }));
}

fn countdown(n: usize) -> String {
    format!("
функция санау(n бүтін) бүтін {{
    егер (n == 0) {{ қайтар 0 }}
    қайтар 1 + санау(n - 1)
}}
функция негізгі() ештеңе {{ жаз(санау({n})) }}
")
}

#[test]
fn call_depth_limit_is_exact_on_the_default_stack() {
    // негізгі takes the first of the MAX_CALL_DEPTH frames.
    let deepest = MAX_CALL_DEPTH - 2;

    assert_eq!(output(&countdown(deepest)), format!("{deepest}\n"));
    assert!(matches!(runtime_error(&countdown(deepest + 1)),
                     RuntimeError::CallStackExhausted { depth: MAX_CALL_DEPTH, .. }));
}

fn load_error(source: &str) -> RuntimeError {
    let decls = parse("test.qurt", source.as_bytes()).expect("program should parse");
    match Machine::new(decls, Vec::new()) {
        Err(e) => e,
        Ok(_) => panic!("{source:?} should be rejected"),
    }
}

#[test]
fn machine_construction_errors() {
    assert!(matches!(load_error("функция f() ештеңе {}"),
                     RuntimeError::MissingEntryPoint { name: "негізгі" }));
    assert!(matches!(load_error("функция негізгі(x бүтін) ештеңе {}"),
                     RuntimeError::InvalidEntryPoint { line: 1, .. }));
    assert!(matches!(load_error("функция негізгі() бүтін { қайтар 1 }"),
                     RuntimeError::InvalidEntryPoint { .. }));
    assert!(matches!(load_error("функция негізгі() ештеңе {}\nфункция негізгі() ештеңе {}"),
                     RuntimeError::DuplicateFunction { line: 2, .. }));
    assert!(matches!(load_error("функция жаз() ештеңе {}\nфункция негізгі() ештеңе {}"),
                     RuntimeError::BuiltinFunctionRedefinition { .. }));
    assert!(matches!(load_error("құрылым Н { }\nқұрылым Н { }\nфункция негізгі() ештеңе {}"),
                     RuntimeError::DuplicateStruct { line: 2, .. }));
}

#[test]
fn recursive_structs_are_rejected_when_used() {
    let source = "
құрылым Түйін { келесі Түйін }
функция негізгі() ештеңе { айнымалы т Түйін }
";

    assert!(matches!(runtime_error(source), RuntimeError::RecursiveStruct { .. }));
}

#[test]
fn runtime_errors_render_with_their_line() {
    let err = runtime_error(&main_with("жаз(белгісіз)"));

    assert_eq!(err.to_string(), "Error on line 2: Unknown variable 'белгісіз'.");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_runtime_errors() {
    let source = main_with("жаз(1)");

    let result = run(BrokenSink, "test.qurt", source.as_bytes());
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Output { line: 2, .. }))));
}

#[test]
fn assignment_checks_the_final_field_or_element() {
    let shapes = "
құрылым Нүкте { x бүтін; y бүтін }
құрылым Сызық { нүктелер [2]Нүкте }
";
    let program = |body: &str| format!("{shapes}{}", main_with(body));

    assert_eq!(output(&program("айнымалы с Сызық\nс.нүктелер[1].y = 7\nжаз(с)")),
               "Сызық{нүктелер: [Нүкте{x: 0, y: 0} Нүкте{x: 0, y: 7}]}\n");
    assert!(matches!(runtime_error(&program("айнымалы с Сызық\nс.нүктелер[0].x = \"а\"")),
                     RuntimeError::AssignmentTypeMismatch { ref expected, ref found, .. }
                         if expected == "бүтін" && found == "жол"));
    assert!(matches!(runtime_error(&program("айнымалы с Сызық\nс.нүктелер[0].z = 1")),
                     RuntimeError::UnknownField { ref field, .. } if field == "z"));
    assert!(matches!(runtime_error(&program("айнымалы с Сызық\nс.нүктелер[2] = с.нүктелер[0]")),
                     RuntimeError::IndexOutOfBounds { index: 2, len: 2, .. }));
}
