/// Joins a normalized word sequence into kebab-case.
pub fn kebabify(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<String>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::kebabify;

    #[test]
    fn joins_with_hyphens() {
        let words = vec!["hello".to_string(), "World".to_string()];

        assert_eq!(kebabify(&words), "hello-world");
    }

    #[test]
    fn single_word_has_no_separator() {
        assert_eq!(kebabify(&["kebab".to_string()]), "kebab");
    }
}
