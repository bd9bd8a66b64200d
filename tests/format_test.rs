use stencil::error::Error;
use stencil::format::{ensure_rustfmt, FormatterStrategy};

#[test]
fn test_native_formats_valid_source() {
    let out = FormatterStrategy::Native
        .format("fn main(){let x=1;println!(\"{}\",x);}")
        .unwrap();
    assert!(out.contains("fn main()"));
    assert!(out.contains("let x = 1;"));
    assert!(out.ends_with('\n'));
}

#[test]
fn test_native_preserves_generated_marker() {
    let out = FormatterStrategy::Native
        .format("//! Code generated by t.tmpl. DO NOT EDIT.\n\nfn main() {}\n")
        .unwrap();
    assert!(out.starts_with("//! Code generated by t.tmpl. DO NOT EDIT."));
}

#[test]
fn test_native_rejects_invalid_source() {
    match FormatterStrategy::Native.format("fn main( {") {
        Err(Error::FormatError(_)) => (),
        _ => panic!("Expected FormatError"),
    }
}

#[test]
fn test_native_is_deterministic() {
    let src = "fn add(a:u32,b:u32)->u32{a+b}";
    let first = FormatterStrategy::Native.format(src).unwrap();
    let second = FormatterStrategy::Native.format(src).unwrap();
    assert_eq!(first, second);
}

// The rustfmt-backed tests are skipped when the binary is not installed.
#[test]
fn test_rustfmt_formats_valid_source() {
    if ensure_rustfmt().is_err() {
        return;
    }
    let out = FormatterStrategy::Rustfmt.format("fn main() {let x=1;}\n").unwrap();
    assert!(out.contains("let x = 1;"));
}

#[test]
fn test_rustfmt_failure_carries_stderr() {
    if ensure_rustfmt().is_err() {
        return;
    }
    match FormatterStrategy::Rustfmt.format("fn main( {") {
        Err(Error::FormatError(msg)) => assert!(!msg.is_empty()),
        _ => panic!("Expected FormatError"),
    }
}
