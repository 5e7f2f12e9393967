use sojson_core::{IndentSize, OperationKind, UnknownOperation};

#[test]
fn operation_names_parse_case_insensitively() {
    assert_eq!("format".parse(), Ok(OperationKind::Format));
    assert_eq!(" Unescape ".parse(), Ok(OperationKind::Unescape));
    assert_eq!("VALIDATE".parse(), Ok(OperationKind::Validate));
    assert_eq!("process".parse(), Ok(OperationKind::Process));
    assert_eq!(
        "minify".parse::<OperationKind>(),
        Err(UnknownOperation("minify".to_string()))
    );
}

#[test]
fn process_alias_behaves_like_format() {
    assert_eq!(OperationKind::Process.canonical(), OperationKind::Format);
    assert!(OperationKind::Process.is_transform());
    assert!(OperationKind::Unescape.is_transform());
    assert!(!OperationKind::Validate.is_transform());
    assert_eq!(OperationKind::Process.endpoint(), "process");
}

#[test]
fn indent_accepts_only_known_widths() {
    assert_eq!("4".parse(), Ok(IndentSize::Four));
    assert_eq!(IndentSize::try_from(0), Ok(IndentSize::Zero));
    assert_eq!(IndentSize::default().width(), 2);
    assert!("3".parse::<IndentSize>().is_err());
    assert!("tab".parse::<IndentSize>().is_err());
    assert!(IndentSize::try_from(16).is_err());
}
