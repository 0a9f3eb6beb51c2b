//! Pure text normalization for form-like PDF templates.
//!
//! Extracted page text arrives as one blob with arbitrary line wrapping.
//! Normalization flattens it and puts each `Label:` on its own line so the
//! template reads like a fillable form in a terminal.

/// Collapse all whitespace runs to single spaces, then break the line after
/// every colon. A space directly following a colon is consumed by the break,
/// so `"Name: Objective:"` becomes `"Name:\nObjective:\n"`.
#[must_use]
pub fn normalize_template(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len() + 16);
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == ':' {
            if chars.peek() == Some(&' ') {
                chars.next();
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_label_onto_own_line() {
        assert_eq!(
            normalize_template("Name: Objective: Standard:"),
            "Name:\nObjective:\nStandard:\n"
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            normalize_template("Unit   Name\t\t:  algebra\n\n\nreview"),
            "Unit Name :\nalgebra review"
        );
    }

    #[test]
    fn colon_without_following_space() {
        assert_eq!(normalize_template("Date:2024-01-05"), "Date:\n2024-01-05");
    }

    #[test]
    fn preserves_page_order() {
        let page_one = "Page one header: intro";
        let page_two = "Page two header: body";
        let joined = format!("{page_one}\n{page_two}");
        let normalized = normalize_template(&joined);
        let first = normalized.find("Page one header").unwrap();
        let second = normalized.find("Page two header").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_template(""), "");
        assert_eq!(normalize_template("   \n\t "), "");
    }

    #[test]
    fn no_colons_means_single_line() {
        let out = normalize_template("plain  text without\nlabels");
        assert_eq!(out, "plain text without labels");
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = normalize_template("Name: Objective:   Standard:x y  z");
        let twice = normalize_template(&once);
        assert_eq!(once, twice);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn newline_follows_every_colon(s in "[ \\t\\na-zA-Z0-9:]{0,200}") {
            let out = normalize_template(&s);
            let bytes = out.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                if b == b':' {
                    prop_assert_eq!(bytes.get(i + 1), Some(&b'\n'));
                }
            }
        }

        #[test]
        fn no_adjacent_whitespace_pairs(s in "[ \\t\\na-zA-Z0-9:]{0,200}") {
            let out = normalize_template(&s);
            let chars: Vec<char> = out.chars().collect();
            for pair in chars.windows(2) {
                prop_assert!(
                    !(pair[0].is_whitespace() && pair[1].is_whitespace()),
                    "whitespace run in {:?}",
                    out
                );
            }
        }
    }
}
