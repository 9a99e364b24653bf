/// Upper-cases ASCII letters and drops everything else (spaces, digits,
/// punctuation, non-ASCII), producing the A-Z stream the machine and the
/// scorer accept.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Joins positional command-line words and sanitizes them.
pub fn sanitize_words<S: AsRef<str>>(words: &[S]) -> String {
    let joined: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    sanitize(&joined.join(" "))
}
