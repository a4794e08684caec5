/// Reduce a title to a permissive comparison key: ASCII lower-case, trailing
/// qualifiers cut off, separator punctuation removed.
///
/// A qualifier is anything after a `(` or after a dash that follows
/// whitespace, so `"My Book - Draft 2"`, `"My Book (old)"`, and
/// `"my-book"` all collapse to `"mybook"`.
pub fn normalize(title: &str) -> String {
    let mut base = title;
    if let Some(idx) = base.find('(') {
        base = &base[..idx];
    }
    if let Some(idx) = base.find(" -") {
        base = &base[..idx];
    }
    base.chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | ':' | ';' | '-'))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Undo potential camel-casing in a name derived from a filename.
///
/// Inputs that already contain a space are returned as written; the author
/// knew how to use a spacebar.
pub fn un_camel_case(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.contains(' ') {
        return trimmed.to_string();
    }
    let mut out = String::with_capacity(trimmed.len() + 4);
    let mut prev_lower = false;
    for (i, ch) in trimmed.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
            continue;
        }
        if prev_lower && ch.is_uppercase() {
            out.push(' ');
        }
        out.push(ch);
        prev_lower = ch.is_lowercase();
    }
    out
}

/// The single source of truth for "same project" title comparisons.
///
/// Verbatim equality first, then equality of normalized keys. Every other
/// module compares titles through this predicate.
pub fn titles_equivalent(a: &str, b: &str) -> bool {
    a == b || normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::{normalize, titles_equivalent, un_camel_case};

    #[test]
    fn normalize_strips_case_space_and_punctuation() {
        assert_eq!(normalize("My Book"), "mybook");
        assert_eq!(normalize("my_book: two;"), "mybooktwo");
    }

    #[test]
    fn normalize_cuts_trailing_qualifiers() {
        assert_eq!(normalize("My Book - Draft 2"), "mybook");
        assert_eq!(normalize("My Book (old copy)"), "mybook");
        assert_eq!(normalize("my-book (draft)"), "mybook");
    }

    #[test]
    fn equivalence_is_generous_but_not_blind() {
        assert!(titles_equivalent("My Book", "My Book"));
        assert!(titles_equivalent("My Book", "my-book (draft)"));
        assert!(titles_equivalent("Oceans", "oceans"));
        assert!(!titles_equivalent("Book One", "Book Two"));
    }

    #[test]
    fn un_camel_case_splits_lower_to_upper_boundaries() {
        assert_eq!(un_camel_case("myFirstNovel"), "My First Novel");
        assert_eq!(un_camel_case("oceans"), "Oceans");
    }

    #[test]
    fn un_camel_case_leaves_spaced_input_alone() {
        assert_eq!(un_camel_case("Already Spaced"), "Already Spaced");
        assert_eq!(un_camel_case("  plainName  "), "Plain Name");
    }

    #[test]
    fn un_camel_case_keeps_acronym_runs_together() {
        assert_eq!(un_camel_case("myABCNovel"), "My ABCNovel");
    }
}
