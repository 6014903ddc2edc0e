/// Splits the model's question output into individual displayable items.
/// The prompt asks for one numbered question per line; blank lines and
/// surrounding whitespace are dropped.
pub fn split_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_questions_one_per_line() {
        let reply = "1. What is ownership in Rust?\n2. Explain lifetimes.\n3. What does Send mean?";
        assert_eq!(
            split_questions(reply),
            vec![
                "1. What is ownership in Rust?",
                "2. Explain lifetimes.",
                "3. What does Send mean?"
            ]
        );
    }

    #[test]
    fn test_split_questions_drops_blank_lines_and_trims() {
        let reply = "\n  1. First question?  \n\n2. Second question?\n   \n";
        assert_eq!(
            split_questions(reply),
            vec!["1. First question?", "2. Second question?"]
        );
    }

    #[test]
    fn test_split_questions_empty_input() {
        assert!(split_questions("").is_empty());
        assert!(split_questions("   \n  \n").is_empty());
    }
}
