use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::iter;

pub mod error_code;

pub type CoreRsResult<T> = Result<T, Exception>;

pub struct Exception {
    pub severity: Severity,
    pub code: Option<String>,
    pub message: String,
    pub location: Option<String>,
    pub source: Option<Box<Exception>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

impl Exception {
    pub fn chain(&self) -> impl Iterator<Item = &Exception> {
        let mut current = Some(self);
        iter::from_fn(move || {
            let exception = current?;
            current = exception.source.as_deref();
            Some(exception)
        })
    }
}

impl Debug for Exception {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, exception) in self.chain().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{index}: {} ", exception.severity)?;
            if let Some(ref code) = exception.code {
                write!(f, "[{code}] ")?;
            }
            write!(f, "{}", exception.message)?;
            if let Some(ref location) = exception.location {
                write!(f, " at {location}")?;
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! exception {
    ($(severity = $severity:expr,)? $(code = $code:expr,)? message = $message:expr $(,source = $source:expr)?) => {{
        #[allow(unused_variables)]
        let severity = $crate::exception::Severity::Error;
        $(
            let severity = $severity;
        )?
        #[allow(unused_variables)]
        let code: Option<String> = None;
        $(
            let code = Some($code.to_string());
        )?
        #[allow(unused_variables)]
        let source: Option<Box<$crate::exception::Exception>> = None;
        $(
            let source = Some(Box::new($source.into()));
        )?
        $crate::exception::Exception {
            severity,
            code,
            message: $message.to_string(),
            location: Some(format!("{}:{}:{}", file!(), line!(), column!())),
            source,
        }
    }};
}

fn source(source: Option<&(dyn Error + 'static)>) -> Option<Box<Exception>> {
    let mut sources = Vec::new();
    let mut current_source = source;
    while let Some(target) = current_source {
        sources.push(target);
        current_source = target.source();
    }

    sources.into_iter().rev().fold(None, |result, error| {
        Some(Box::new(Exception {
            severity: Severity::Error,
            code: None,
            message: error.to_string(),
            location: None,
            source: result,
        }))
    })
}

impl<T> From<T> for Exception
where
    T: Error + 'static,
{
    fn from(error: T) -> Self {
        Exception {
            severity: Severity::Error,
            code: None,
            message: error.to_string(),
            location: None,
            source: source(error.source()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::Exception;
    use super::Severity;
    use super::error_code;

    #[test]
    fn display_chain() {
        let exception = exception!(
            severity = Severity::Warn,
            code = error_code::CONFIG_ERROR,
            message = "stream must not be empty",
            source = io::Error::other("missing field")
        );

        let output = exception.to_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0: WARN [CONFIG_ERROR] stream must not be empty at "));
        assert_eq!(lines[1], "1: ERROR missing field");
    }

    #[test]
    fn from_error() {
        let exception: Exception = io::Error::other("broken pipe").into();
        assert_eq!(exception.severity, Severity::Error);
        assert_eq!(exception.code, None);
        assert_eq!(exception.message, "broken pipe");
        assert_eq!(exception.chain().count(), 1);
    }
}
