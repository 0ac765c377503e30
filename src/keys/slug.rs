use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Turn arbitrary text into a key-safe token matching `[a-z0-9_]`.
///
/// Lowercases, decomposes accented characters and strips the combining
/// marks, drops everything else outside `[a-z0-9\s_-]`, then folds
/// whitespace/hyphen/underscore runs into a single underscore with no
/// leading or trailing one. Total: every input yields some output, possibly
/// the empty string — callers substitute their fallback token for that.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'a'..='z' | '0'..='9' => {
                if pending_separator && !out.is_empty() {
                    out.push('_');
                }
                pending_separator = false;
                out.push(c);
            }
            '_' | '-' => pending_separator = true,
            c if c.is_whitespace() => pending_separator = true,
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn strips_diacritics() {
        assert_eq!(slugify("Café Menü"), "cafe_menu");
        assert_eq!(slugify("Über uns"), "uber_uns");
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("  Hello   World  "), "hello_world");
        assert_eq!(slugify("a__b--c d"), "a_b_c_d");
        assert_eq!(slugify("__trimmed__"), "trimmed");
    }

    #[test]
    fn drops_disallowed_characters() {
        assert_eq!(slugify("Price: $42!"), "price_42");
        assert_eq!(slugify("Hello!World"), "helloworld");
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }
}
