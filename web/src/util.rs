use libgeopost::format::autop;

/// A minijinja template filter that wraps blank-line-delimited text blocks
/// in paragraph elements so templates can render plain-text post bodies.
pub(crate) fn autop_filter(value: Option<&str>) -> minijinja::Value {
    minijinja::Value::from_safe_string(autop(value.unwrap_or("")))
}

#[test]
fn test_autop_filter() {
    assert_eq!(
        autop_filter(Some("one\n\ntwo")).as_str(),
        Some("<p>one</p>\n<p>two</p>")
    );
    assert_eq!(autop_filter(None).as_str(), Some(""));
}
