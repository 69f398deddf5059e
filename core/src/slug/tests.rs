use super::slug;

#[test]
fn matches_deployed_digests() {
    assert_eq!(slug("Radiohead"), "16a968cdb906137a952161789b5c1ea3");
    assert_eq!(slug("The Beatles"), "c9e770c62114ed60fd1a4c6dd866e2d8");
}

#[test]
fn hashes_utf8_bytes_of_non_ascii_names() {
    assert_eq!(slug("Sigur Rós"), "355a17a3c5a59c1ce50a869065c6cedb");
}

#[test]
fn fixed_length_lowercase_hex() {
    for name in ["", "a", "Four Tet", "CHVRCHES"] {
        let s = slug(name);
        assert_eq!(s.len(), 32);
        assert!(s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }
}

#[test]
fn equal_names_equal_slugs() {
    assert_eq!(slug("Radiohead"), slug("Radiohead"));
    assert_ne!(slug("Radiohead"), slug("radiohead"));
}
