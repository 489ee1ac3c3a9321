use regex::Regex;

/// Compiles a SQL `LIKE` pattern.
///
/// `%` matches any run of characters and `_` matches exactly one. Every
/// other character matches itself, ignoring case. The match is anchored at
/// both ends and `%` crosses line breaks.
///
/// # Errors
/// Returns the regex compile error. Escaping every literal character means
/// this only fails if the compiled pattern exceeds the regex size limit.
///
/// # Example
/// ```
/// use reckon::util::pattern::like_regex;
///
/// let re = like_regex("Jo_n%").unwrap();
/// assert!(re.is_match("john smith"));
/// assert!(!re.is_match("jon"));
/// assert!(like_regex("a.c").unwrap().is_match("A.C"));
/// assert!(!like_regex("a.c").unwrap().is_match("abc"));
/// ```
pub fn like_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::from("(?is)^");

    for chr in pattern.chars() {
        match chr {
            '%' => source.push_str(".*"),
            '_' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    source.push('$');
    Regex::new(&source)
}
