use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardError::resource("x")
            .to_string()
            .contains("resource load error:")
    );
    assert!(
        CardError::measurement("x")
            .to_string()
            .contains("measurement error:")
    );
    assert!(CardError::encode("x").to_string().contains("encode error:"));
    assert_eq!(CardError::Cancelled.to_string(), "render cancelled");
}

#[test]
fn timeout_reports_bound() {
    let err = CardError::Timeout(std::time::Duration::from_millis(250));
    assert!(err.to_string().contains("250ms"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
