/// Splits text into comparison tokens: lowercase, punctuation stripped,
/// whitespace collapsed, empty tokens dropped.
///
/// Word characters are Unicode alphanumerics and `_`; everything else
/// that is not whitespace is removed without splitting the word.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
