//! Arabic diacritic normalization for correction matching.
//!
//! The rules are applied in order, each replacing every occurrence before the
//! next runs. Later rules see the output of earlier ones, so the order is
//! part of the contract.

/// `(pattern, replacement)` pairs, applied top to bottom
pub const DEFAULT_DIACRITIC_RULES: &[(&str, &str)] = &[
    // fatha before alef
    ("\u{064E}\u{0627}", "\u{0627}"),
    // kasra before yeh
    ("\u{0650}\u{064A}", "\u{064A}"),
    // damma before waw
    ("\u{064F}\u{0648}", "\u{0648}"),
    // sukun on the definite article, then any remaining sukun
    ("\u{0627}\u{0644}\u{0652}", "\u{0627}\u{0644}"),
    ("\u{0652}", ""),
    // shadda always precedes the short vowel
    ("\u{064E}\u{0651}", "\u{0651}\u{064E}"),
    ("\u{0650}\u{0651}", "\u{0651}\u{0650}"),
    ("\u{064F}\u{0651}", "\u{0651}\u{064F}"),
    ("\u{064B}\u{0651}", "\u{0651}\u{064B}"),
    ("\u{064D}\u{0651}", "\u{0651}\u{064D}"),
    ("\u{064C}\u{0651}", "\u{0651}\u{064C}"),
    // vowels on alef
    ("\u{0627}\u{064E}", "\u{0627}"),
    ("\u{0627}\u{0650}", "\u{0627}"),
    ("\u{0644}\u{0650}\u{0627}", "\u{0644}\u{0627}"),
    // tanween fath written after alef
    ("\u{0627}\u{064B}", "\u{064B}\u{0627}"),
];

/// Strip the diacritic variations that do not change a citation's identity
pub fn remove_default_diacritics(text: &str) -> String {
    DEFAULT_DIACRITIC_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            if acc.contains(pattern) {
                acc.replace(pattern, replacement)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(remove_default_diacritics("abc"), "abc");
        assert_eq!(remove_default_diacritics(""), "");
    }

    #[test]
    fn test_sukun_removed() {
        // meem + sukun + noon
        assert_eq!(remove_default_diacritics("\u{0645}\u{0652}\u{0646}"), "\u{0645}\u{0646}");
    }

    #[test]
    fn test_definite_article_sukun() {
        assert_eq!(
            remove_default_diacritics("\u{0627}\u{0644}\u{0652}\u{062D}"),
            "\u{0627}\u{0644}\u{062D}"
        );
    }

    #[test]
    fn test_shadda_reordered() {
        // beh + fatha + shadda  ->  beh + shadda + fatha
        assert_eq!(
            remove_default_diacritics("\u{0628}\u{064E}\u{0651}"),
            "\u{0628}\u{0651}\u{064E}"
        );
    }

    #[test]
    fn test_both_orders_normalize_equal() {
        let a = "\u{0631}\u{064E}\u{0628}\u{0651}\u{064E}";
        let b = "\u{0631}\u{064E}\u{0628}\u{064E}\u{0651}";
        assert_eq!(remove_default_diacritics(a), remove_default_diacritics(b));
    }

    #[test]
    fn test_idempotent_on_sample() {
        let text = "\u{0642}\u{064E}\u{0627}\u{0644}\u{064E} \u{0627}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{064F}";
        let once = remove_default_diacritics(text);
        assert_eq!(remove_default_diacritics(&once), once);
    }
}
