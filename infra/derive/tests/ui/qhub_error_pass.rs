use qhub_derive::qhub_error;
use std::borrow::Cow;

#[qhub_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Out of range{}: {value}", format_context(.context))]
    OutOfRange { value: i64, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, DemoError> {
    let value = raw.parse::<i64>().context("Parsing demo value")?;
    if value < 0 {
        return Err::<i64, _>(DemoError::OutOfRange { value, context: None }).context("Checking sign");
    }
    Ok(value)
}

fn main() {
    assert_eq!(parse("7").ok(), Some(7));
    assert!(matches!(parse("x"), Err(DemoError::Parse { context: Some(_), .. })));
    assert!(matches!(parse("-1"), Err(DemoError::OutOfRange { context: Some(_), .. })));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let owned: DemoError = String::from("late").into();
    assert!(matches!(owned, DemoError::Internal { .. }));
}
