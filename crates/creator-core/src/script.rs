/// Language tag the model is asked to produce.
pub const FENCE_LANGUAGE: &str = "python";

const FENCE: &str = "```";

/// Remove the markdown code fence a model may wrap around its answer.
///
/// At most one opener (tagged `` ```python `` first, then bare `` ``` ``) and
/// one closing `` ``` `` are removed, and only at the very start and end of
/// the trimmed text. Fences inside the body are left alone.
///
/// The text is trimmed *before* the fence checks as well as after. Checking
/// the raw text instead would leave the closer in place whenever the model
/// adds a newline after it: `"```python\nprint(1)\n```\n"` would come out
/// as `"print(1)\n```"` rather than `"print(1)"`.
pub fn strip_code_fences(text: &str) -> String {
    let mut body = text.trim();

    let tagged = format!("{FENCE}{FENCE_LANGUAGE}");
    if let Some(rest) = body.strip_prefix(tagged.as_str()) {
        body = rest;
    } else if let Some(rest) = body.strip_prefix(FENCE) {
        body = rest;
    }

    if let Some(rest) = body.strip_suffix(FENCE) {
        body = rest;
    }

    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tagged_fence() {
        assert_eq!(strip_code_fences("```python\nprint(1)\n```"), "print(1)");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\nx = 1\n```\n"), "x = 1");
    }

    #[test]
    fn closer_followed_by_newline_is_removed() {
        assert_eq!(strip_code_fences("```python\nprint(1)\n```\n"), "print(1)");
    }

    #[test]
    fn unfenced_text_is_only_trimmed() {
        assert_eq!(
            strip_code_fences("  import os\nprint(os.getcwd())\n\n"),
            "import os\nprint(os.getcwd())"
        );
    }

    #[test]
    fn only_one_opener_is_removed() {
        assert_eq!(strip_code_fences("```python```python\nx\n```"), "```python\nx");
    }

    #[test]
    fn embedded_fences_survive() {
        let text = "```python\ndoc = \"\"\"\n```\nexample\n```\n\"\"\"\n```";
        assert_eq!(
            strip_code_fences(text),
            "doc = \"\"\"\n```\nexample\n```\n\"\"\""
        );
    }

    #[test]
    fn other_language_tag_is_left_after_bare_opener() {
        assert_eq!(strip_code_fences("```py\nx\n```"), "py\nx");
    }

    #[test]
    fn closer_without_opener() {
        assert_eq!(strip_code_fences("x = 2\n```"), "x = 2");
    }

    #[test]
    fn fence_only_yields_empty() {
        assert_eq!(strip_code_fences("```"), "");
        assert_eq!(strip_code_fences("```python\n```"), "");
    }
}
