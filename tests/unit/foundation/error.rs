use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(HintError::render("x").to_string().contains("render error:"));
    assert!(
        HintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
