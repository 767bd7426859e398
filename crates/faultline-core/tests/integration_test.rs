//! Integration tests for Faultline core functionality
//!
//! Drives the converter the way a host error trap would: raw diagnostics in,
//! classified exceptions with clean traces out.

use faultline_core::{
    Classifier, ConverterConfig, Converter, DiagnosticEvent, ExceptionKind, FaultlineError,
    FaultlineResult, Frame, PartialException, Severity, UnifiedError,
};
use std::path::Path;

/// Stack as a host would report it from inside its error trap. The trap's
/// synthesis frame sits at the diagnostic's own location, followed by the
/// dispatch frames that led from the faulting call into the trap.
fn host_stack() -> Vec<Frame> {
    vec![
        Frame::new("app.src", 55).with_function("{closure}"),
        Frame::internal("trigger_diagnostic"),
        Frame::new("app.src", 55).with_function("validate"),
        Frame::new("controller.src", 120).with_function("handle"),
        Frame::new("index.src", 8),
    ]
}

#[test]
fn test_trap_to_exception() -> FaultlineResult<()> {
    let converter = Converter::with_stack_source(Classifier::builtin(), host_stack);

    let exception = converter.from_event(DiagnosticEvent::new(
        Severity::USER_WARNING,
        "bad input",
        "app.src",
        55,
    ))?;

    assert_eq!(exception.to_string(), "User Warning: bad input");
    assert_eq!(exception.kind(), ExceptionKind::Warning);
    assert_eq!(exception.file(), Path::new("app.src"));
    assert_eq!(exception.line(), 55);
    assert_eq!(
        exception.trace().frames(),
        &[
            Frame::new("controller.src", 120).with_function("handle"),
            Frame::new("index.src", 8),
        ]
    );
    Ok(())
}

#[test]
fn test_trace_without_synthesis_frame_is_kept() -> FaultlineResult<()> {
    let converter = Converter::with_stack_source(Classifier::builtin(), host_stack);

    let exception = converter.from_error(Severity::DEPRECATED, "each() is gone", "legacy.src", 3)?;

    assert_eq!(exception.message(), "Deprecated: each() is gone");
    assert_eq!(exception.kind(), ExceptionKind::Deprecation);
    assert_eq!(exception.trace().frames(), host_stack().as_slice());
    Ok(())
}

#[test]
fn test_renormalization_roundtrip() -> FaultlineResult<()> {
    let converter = Converter::with_stack_source(Classifier::builtin(), host_stack);
    let event = DiagnosticEvent::new(Severity::USER_DEPRECATED, "old api", "lib.src", 3);

    let first = converter.from_event(event.clone())?;
    assert_eq!(converter.from_existing(first.clone())?, first);

    // A host that rethrows the message as a plain exception
    let rethrown = PartialException::new(
        first.severity(),
        first.message(),
        first.file(),
        first.line(),
    );
    let relabeled = converter.from_existing(rethrown)?;
    assert_eq!(relabeled.message(), "User Deprecated: old api");
    assert_eq!(relabeled, converter.from_event(event)?);
    Ok(())
}

#[test]
fn test_every_builtin_severity_converts() {
    let converter = Converter::new(Classifier::builtin());
    for severity in Severity::ALL {
        let exception = converter
            .from_error(severity, "msg", "app.src", 1)
            .unwrap_or_else(|e| panic!("{severity} failed: {e}"));
        assert!(exception.message().ends_with(": msg"));
        assert_eq!(exception.kind(), converter.classifier().resolve_kind(severity));
    }
}

#[test]
fn test_configured_host_severity() -> FaultlineResult<()> {
    let config = ConverterConfig::from_toml_str(
        r#"
        [[severity]]
        code = 32768
        label = "Host Advisory"
        kind = "warning"

        [[severity]]
        code = 65536
        label = "Host Trace"
        "#,
    )?;
    let converter = Converter::new(Classifier::from_config(&config)?);

    let advisory = converter.from_error(Severity::from_code(32768), "slow", "db.src", 4)?;
    assert_eq!(advisory.message(), "Host Advisory: slow");
    assert_eq!(advisory.kind(), ExceptionKind::Warning);

    let traced = converter.from_error(Severity::from_code(65536), "enter", "db.src", 5)?;
    assert_eq!(traced.kind(), ExceptionKind::Generic);

    let err = converter
        .from_error(Severity::from_code(1 << 17), "x", "db.src", 6)
        .unwrap_err();
    assert_eq!(err.error_code(), "FAULTLINE_UNMAPPED_SEVERITY");
    Ok(())
}

#[test]
fn test_invalid_config_rejected() {
    let config = ConverterConfig::from_json_str(
        r#"{"severity": [{"code": 2, "label": "Warning", "kind": "fatal"}]}"#,
    )
    .unwrap();
    assert!(matches!(
        Classifier::from_config(&config),
        Err(FaultlineError::Config { .. })
    ));
}

#[test]
fn test_shared_converter_across_threads() {
    let converter = Converter::with_stack_source(Classifier::builtin(), host_stack);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8u32)
            .map(|line| {
                let converter = &converter;
                scope.spawn(move || converter.from_error(Severity::NOTICE, "n", "app.src", line))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        let exception = result.unwrap();
        assert_eq!(exception.line(), i as u32 + 1);
        assert_eq!(exception.message(), "Notice: n");
    }
}

#[test]
fn test_conversion_logs_with_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let converter = Converter::with_stack_source(Classifier::builtin(), host_stack);
        assert!(converter.from_error(Severity::WARNING, "w", "app.src", 55).is_ok());
        assert!(converter.from_error(Severity::from_code(0), "w", "app.src", 55).is_err());
    });
}
