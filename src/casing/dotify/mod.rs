/// Joins a normalized word sequence into dot.case.
pub fn dotify(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<String>>()
        .join(".")
}
