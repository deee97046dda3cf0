/// Syntax markers and their descriptions, in display order.
const COMPONENTS: [(&str, &str); 8] = [
    ("^", "^ = Start of string"),
    ("$", "$ = End of string"),
    ("+", "+ = One or more of preceding element"),
    ("*", "* = Zero or more of preceding element"),
    ("?", "? = Zero or one of preceding element"),
    (r"\d", r"\d = Any digit (0-9)"),
    (r"\w", r"\w = Any word character (a-z, A-Z, 0-9, _)"),
    (r"\s", r"\s = Any whitespace character"),
];

const CHARACTER_CLASS: &str = "[] = Character class (match any character inside)";

/// Describe the common regex components that appear in `pattern`.
///
/// This is a textual scan, not a parse: an escaped `\+` still reports `+`.
#[must_use]
pub fn breakdown(pattern: &str) -> Vec<&'static str> {
    let mut components: Vec<&'static str> = COMPONENTS[..5]
        .iter()
        .filter(|(marker, _)| pattern.contains(marker))
        .map(|(_, description)| *description)
        .collect();

    if pattern.contains('[') && pattern.contains(']') {
        components.push(CHARACTER_CLASS);
    }

    components.extend(
        COMPONENTS[5..]
            .iter()
            .filter(|(marker, _)| pattern.contains(marker))
            .map(|(_, description)| *description),
    );

    components
}
