// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use trade_ledger_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn store_read() {
        let err = CoreError::StoreRead {
            key: "my_trades".into(),
            message: "offline".into(),
        };
        assert_eq!(err.to_string(), "Store read failed for key 'my_trades': offline");
    }

    #[test]
    fn store_write() {
        let err = CoreError::StoreWrite {
            key: "father_trades".into(),
            message: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "Store write failed for key 'father_trades': quota exceeded"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad value".into());
        assert_eq!(err.to_string(), "Serialization error: bad value");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("duplicate key".into());
        assert_eq!(err.to_string(), "Invalid configuration: duplicate key");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let err: CoreError = io.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("read-only volume")),
            other => panic!("expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("[").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn open_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here/ledger.json")?)
        }
        assert!(matches!(open_missing(), Err(CoreError::FileIO(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

#[test]
fn is_std_error_and_thread_safe() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CoreError>();
}
