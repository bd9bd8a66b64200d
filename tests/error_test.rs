use std::io;

use stencil::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::UsageError("expected NAME=VALUE, got 'A'".to_string());
    assert_eq!(err.to_string(), "Usage error: expected NAME=VALUE, got 'A'.");

    let err = Error::DataError("invalid JSON data: EOF".to_string());
    assert_eq!(err.to_string(), "Invalid data document: invalid JSON data: EOF.");

    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");

    let err = Error::FormatError("unexpected token".to_string());
    assert_eq!(err.to_string(), "Format error: unexpected token.");
}
