use creator_core::script::FENCE_LANGUAGE;

/// Append the code-only generation directives to the prompt.
pub fn append_directives(prompt: &mut String) {
    let language = display_language();
    prompt.push_str(&format!(
        "Generate a {language} script based on the following instructions.\n\
         The script should be complete and executable.\n\
         Only output the {language} code itself, without any surrounding text or explanations.\n"
    ));
}

/// `python` -> `Python`
fn display_language() -> String {
    let mut chars = FENCE_LANGUAGE.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_forbid_narration() {
        let mut prompt = String::new();
        append_directives(&mut prompt);
        assert!(prompt.contains("without any surrounding text or explanations"));
        assert!(prompt.ends_with('\n'));
    }

    #[test]
    fn language_is_capitalized() {
        assert_eq!(display_language(), "Python");
    }
}
