use super::*;

#[test]
fn escape_covers_markup_and_attribute_characters() {
    assert_eq!(escape(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    assert_eq!(escape("Sigur Rós"), "Sigur Rós");
}

#[test]
fn fragment_keeps_its_id_through_clear() {
    let mut fragment = Fragment::new("recent-plays");
    assert_eq!(fragment.id(), "recent-plays");
    assert!(fragment.is_empty());

    fragment.push("<tr></tr>");
    assert_eq!(fragment.html(), "<tr></tr>");

    fragment.clear();
    assert!(fragment.is_empty());
    assert_eq!(fragment.id(), "recent-plays");
}
