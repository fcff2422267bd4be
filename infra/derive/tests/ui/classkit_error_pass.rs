use classkit_derive::classkit_error;
use std::borrow::Cow;

#[classkit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid roster{}: {message}", format_context(.context))]
    InvalidRoster { message: Cow<'static, str>, context: Option<std::borrow::Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("boom"))
}

fn main() {
    let err = read().context("reading roster").unwrap_err();
    assert!(matches!(err, DemoError::Io { .. }));

    let err: DemoError = "fallback".into();
    assert!(matches!(err, DemoError::Internal { .. }));
}
