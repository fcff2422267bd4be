use classkit_derive::classkit_error;
use std::borrow::Cow;

#[classkit_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing column{}: {column}", format_context(.context))]
    MissingColumn { column: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, SampleError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn classkit_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/classkit_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    let err = parse("seven").unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn context_is_rendered_in_display() {
    let err = Err::<(), _>(SampleError::MissingColumn { column: "name".to_owned(), context: None })
        .context("cold calling")
        .unwrap_err();

    assert_eq!(err.to_string(), "Missing column (cold calling): name");
}

#[test]
fn source_results_accept_context_directly() {
    let err = "x".parse::<u32>().context("seed flag").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (seed flag): "));
}

#[test]
fn strings_convert_into_internal() {
    let err = SampleError::from(String::from("unexpected"));
    assert_eq!(err.to_string(), "Internal error: unexpected");
}
