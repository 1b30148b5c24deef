/// Joins a normalized word sequence into camelCase.
///
/// The first word is kept lowercase, every following word gets its first character
/// upper-cased and the rest lowercased.
pub fn camelify(words: &[String]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_lowercase()
            } else {
                let mut chars = w.chars();

                chars
                    .next()
                    .map(|c| c.to_uppercase().collect::<String>())
                    .unwrap_or_default()
                    + &chars.as_str().to_lowercase()
            }
        })
        .collect()
}
