//! Removal of folder-name segments from filename stems.

/// Stem returned when cleaning removes every segment.
pub const UNNAMED: &str = "unnamed";

/// Strips folder-name tokens out of filename stems.
///
/// Tokens are matched as whole separator-delimited segments, case-insensitively,
/// longest token first. A token that itself contains the separator matches a
/// run of consecutive segments. Removing a leading or trailing run leaves no
/// separator behind; removing an interior run leaves one separator between
/// its neighbours.
#[derive(Debug, Clone)]
pub struct NameCleaner {
    sep: char,
    // each token split into lowercased segments, longest token first
    tokens: Vec<Vec<String>>,
}

impl NameCleaner {
    pub fn new<I, S>(tokens: I, sep: char) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        sorted.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        sorted.dedup();

        let tokens = sorted
            .iter()
            .map(|t| {
                t.split(sep)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|segments| !segments.is_empty())
            .collect();

        Self { sep, tokens }
    }

    /// Clean one stem. A result equal to the input means nothing changed.
    pub fn clean(&self, stem: &str) -> String {
        let mut segments: Vec<&str> = stem.split(self.sep).filter(|s| !s.is_empty()).collect();
        let mut lowered: Vec<String> = segments.iter().map(|s| s.to_lowercase()).collect();

        // A later token's removal can bring an earlier token's segments together,
        // so sweep until a whole pass over the tokens removes nothing.
        loop {
            let mut changed = false;
            for token in &self.tokens {
                while let Some(pos) = find_run(&lowered, token) {
                    segments.drain(pos..pos + token.len());
                    lowered.drain(pos..pos + token.len());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        if segments.is_empty() {
            UNNAMED.to_string()
        } else {
            segments.join(self.sep.to_string().as_str())
        }
    }
}

fn find_run(segments: &[String], token: &[String]) -> Option<usize> {
    if token.len() > segments.len() {
        return None;
    }
    segments
        .windows(token.len())
        .position(|window| window == token)
}

/// Clean `stem` against `tokens` with separator `sep`.
pub fn clean<I, S>(stem: &str, tokens: I, sep: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NameCleaner::new(tokens, sep).clean(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tokens_and_collapses_separators() {
        assert_eq!(clean("icons-home-icon", ["icons", "home"], '-'), "icon");
    }

    #[test]
    fn test_only_token_falls_back_to_unnamed() {
        assert_eq!(clean("icons", ["icons"], '-'), UNNAMED);
        assert_eq!(clean("--icons--", ["icons"], '-'), UNNAMED);
    }

    #[test]
    fn test_longer_token_is_never_partially_matched() {
        assert_eq!(clean("icons-home", ["icon", "icons"], '-'), "home");
        assert_eq!(clean("icons-home", ["icon"], '-'), "icons-home");
    }

    #[test]
    fn test_leading_trailing_and_interior_positions() {
        assert_eq!(clean("home-arrow", ["home"], '-'), "arrow");
        assert_eq!(clean("arrow-home", ["home"], '-'), "arrow");
        assert_eq!(clean("arrow-home-left", ["home"], '-'), "arrow-left");
    }

    #[test]
    fn test_repeated_occurrences_are_all_removed() {
        assert_eq!(clean("home-home-arrow-home", ["home"], '-'), "arrow");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(clean("Icons-HOME-Arrow", ["icons", "home"], '-'), "Arrow");
    }

    #[test]
    fn test_substring_inside_segment_is_kept() {
        assert_eq!(clean("homepage-home", ["home"], '-'), "homepage");
    }

    #[test]
    fn test_multi_segment_token_removed_before_its_parts() {
        assert_eq!(clean("brand-logos-x-logos", ["logos", "brand-logos"], '-'), "x");
        assert_eq!(clean("brand-x", ["brand-logos"], '-'), "brand-x");
    }

    #[test]
    fn test_removal_that_exposes_a_longer_token() {
        let tokens = ["a-b", "c"];
        let once = clean("a-c-b", tokens, '-');

        assert_eq!(once, UNNAMED);
        assert_eq!(clean(&once, tokens, '-'), once);
    }

    #[test]
    fn test_separator_is_literal() {
        assert_eq!(clean("icons.home.arrow", ["home"], '.'), "icons.arrow");
        assert_eq!(clean("icons*home*arrow", ["icons"], '*'), "home*arrow");
        assert_eq!(clean("a-b", ["a"], '*'), "a-b");
    }

    #[test]
    fn test_no_tokens_only_normalizes_separators() {
        let none: [&str; 0] = [];
        assert_eq!(clean("a--b-", none, '-'), "a-b");
        assert_eq!(clean("a-b", none, '-'), "a-b");
    }

    #[test]
    fn test_idempotent() {
        let tokens = ["icons", "home", "brand-logos", "logos"];
        for stem in [
            "icons-home-icon",
            "home--logos-brand-logos-x",
            "x-icons-y-home-z",
            "icons",
            "-leading-",
            "unnamed",
        ] {
            let once = clean(stem, tokens, '-');
            assert_eq!(clean(&once, tokens, '-'), once, "stem: {stem}");
        }
    }
}
