/// Wrap blank-line-delimited blocks of plain text in paragraph elements.
///
/// Blocks that already look like a complete paragraph element are passed
/// through unchanged, so running the transform over its own output yields
/// the same markup.
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if block.starts_with("<p") && block.ends_with("</p>") {
                block.to_string()
            } else {
                format!("<p>{block}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::autop;

    #[test]
    fn wraps_blocks() {
        assert_eq!(autop("hello"), "<p>hello</p>");
        assert_eq!(
            autop("first block\n\nsecond block"),
            "<p>first block</p>\n<p>second block</p>"
        );
        // windows line endings and extra blank lines collapse
        assert_eq!(
            autop("first\r\n\r\n\r\n\r\nsecond"),
            "<p>first</p>\n<p>second</p>"
        );
        // single newlines inside a block stay inside one paragraph
        assert_eq!(autop("line one\nline two"), "<p>line one\nline two</p>");
        assert_eq!(autop(""), "");
        assert_eq!(autop("  \n\n  "), "");
    }

    #[test]
    fn idempotent() {
        let once = autop("first block\n\nsecond block");
        assert_eq!(autop(&once), once);

        let once = autop("just one");
        assert_eq!(autop(&once), once);
    }
}
