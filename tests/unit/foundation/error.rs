use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TilemeshError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TilemeshError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TilemeshError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
