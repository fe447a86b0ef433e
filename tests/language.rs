use std::fs::{self};

use qurt::{error::Error, run};
use walkdir::WalkDir;

#[test]
fn example_programs_print_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "qurt"))
    {
        let path = entry.path();
        let source = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                               panic!("Failed to read {expected_path:?}: {e}")
                                                           });

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run(&mut out, &path.display().to_string(), &source) {
            panic!("Program {path:?} failed:\n{e}");
        }

        assert_eq!(String::from_utf8(out).unwrap(), expected, "output of {path:?}");
    }

    assert!(count > 0, "No programs found in programs/");
}

fn output(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(&mut out, "test.qurt", src.as_bytes()) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output(src), expected, "source:\n{src}");
}

fn assert_failure(src: &str) -> Error {
    match run(Vec::new(), "test.qurt", src.as_bytes()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn main_with(body: &str) -> String {
    format!("функция негізгі() ештеңе {{\n{body}\n}}\n")
}

#[test]
fn both_function_layouts_are_accepted() {
    assert_output("функция бүтін екі() { қайтар 2 }\n\
                   функция үш() бүтін { қайтар 3 }\n\
                   функция [2]бүтін жұп() { қайтар {екі(), үш()} }\n\
                   функция негізгі() ештеңе { жаз(жұп()) }\n",
                  "[2 3]\n");
}

#[test]
fn semicolons_and_newlines_both_end_statements() {
    assert_output(&main_with("айнымалы x бүтін = 1; жаз(x); x = 2\nжаз(x)"), "1\n2\n");
}

#[test]
fn expressions_may_span_lines_after_an_operator() {
    assert_output(&main_with("айнымалы x бүтін = 1 +\n    2 *\n    3\nжаз(x)"), "7\n");
}

#[test]
fn call_arguments_may_span_lines() {
    assert_output(&main_with("жаз(1,\n    2,\n    3,\n)"), "1 2 3\n");
}

#[test]
fn escapes_are_printed_verbatim() {
    assert_output(&main_with(r#"жаз("а\nб")"#), "а\\nб\n");
}

#[test]
fn print_accepts_any_number_of_arguments() {
    assert_output(&main_with("жаз()\nжаз(1)\nжаз(1, 2.5, \"үш\", иә)"), "\n1\n1 2.5 үш иә\n");
}

#[test]
fn comments_are_ignored_everywhere() {
    assert_output("// басы\n\
                   функция негізгі() ештеңе { // ашылды\n\
                       жаз(1) // бір\n\
                       // бос жол\n\
                   }\n",
                  "1\n");
}

#[test]
fn syntax_errors_are_diagnostics() {
    assert!(matches!(assert_failure("функция негізгі() ештеңе {"), Error::Syntax(_)));
    assert!(matches!(assert_failure("айнымалы x бүтін = @"), Error::Syntax(_)));
    assert!(matches!(assert_failure(&main_with("1 + 2")), Error::Syntax(_)));
}

#[test]
fn runtime_errors_report_their_line() {
    let err = assert_failure(&main_with("айнымалы x бүтін = 1 / 0"));

    assert!(matches!(err, Error::Runtime(_)));
    assert!(err.to_string().starts_with("Error on line 2:"), "{err}");
}

#[test]
fn program_without_entry_point_fails() {
    assert!(matches!(assert_failure("функция басқа() ештеңе {}"), Error::Runtime(_)));
    assert!(matches!(assert_failure(""), Error::Runtime(_)));
}
