//! エラー型のテスト

use wxapkg_scan::ScanError;

/// ScanErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ScanError::Config("テスト設定エラー".to_string()),
        ScanError::Lookup("timeout".to_string()),
        ScanError::Extraction("exit 1".to_string()),
        ScanError::Selection("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ScanError = io_err.into();

    assert!(matches!(err, ScanError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ScanError = json_err.into();

    assert!(matches!(err, ScanError::Json(_)));
}

/// 照会エラーの内容がメッセージに残る
#[test]
fn test_lookup_message_kept() {
    let err = ScanError::Lookup("HTTP 503".to_string());
    assert!(err.to_string().contains("HTTP 503"));
}
