pub mod script;

/// Assemble the full prompt for a set of instructions.
///
/// The instruction text is embedded verbatim; nothing is trimmed or escaped.
pub fn assemble_prompt(instructions: &str) -> String {
    let mut prompt = String::with_capacity(instructions.len() + 256);
    script::append_directives(&mut prompt);
    prompt.push_str("\nInstructions:\n");
    prompt.push_str(instructions);
    prompt.push('\n');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_matches_template() {
        let prompt = assemble_prompt("Print hello world.");
        assert_eq!(
            prompt,
            "Generate a Python script based on the following instructions.\n\
             The script should be complete and executable.\n\
             Only output the Python code itself, without any surrounding text or explanations.\n\
             \n\
             Instructions:\n\
             Print hello world.\n"
        );
    }

    #[test]
    fn instructions_are_embedded_verbatim() {
        let samples = [
            "one line",
            "  leading and trailing whitespace \n\n",
            "multi\nline\r\nwith ```fences``` and {braces}",
            "unicode: données, 数据, émoji 🐍",
        ];
        for sample in samples {
            let prompt = assemble_prompt(sample);
            assert!(prompt.contains(sample), "missing: {sample:?}");
        }
    }

    #[test]
    fn header_precedes_instructions() {
        let prompt = assemble_prompt("do the thing");
        let header = prompt.find("Instructions:").unwrap();
        let body = prompt.find("do the thing").unwrap();
        assert!(header < body);
    }
}
