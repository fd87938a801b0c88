// ABOUTME: Separator-based label tokenization over borrowed string views.
// ABOUTME: Yields non-owning slices of the input without allocating.

/// Iterator over the separator-delimited labels of a borrowed string.
///
/// Each step extracts the next label from the remaining unscanned suffix and
/// advances past the consumed separator. Yielded labels alias the original
/// input. A separator at the end of the input yields a trailing empty label,
/// and input with no separator yields itself as a single label.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    rest: Option<&'a str>,
    sep: char,
}

impl<'a> Labels<'a> {
    pub fn new(input: &'a str, sep: char) -> Self {
        Self {
            rest: Some(input),
            sep,
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.split_once(self.sep) {
            Some((label, tail)) => {
                self.rest = Some(tail);
                Some(label)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// The labels of `input`, split on `sep`.
pub fn labels(input: &str, sep: char) -> Labels<'_> {
    Labels::new(input, sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separator() {
        let got: Vec<&str> = labels("a.b.com", '.').collect();
        assert_eq!(got, vec!["a", "b", "com"]);
    }

    #[test]
    fn input_without_separator_is_one_label() {
        let got: Vec<&str> = labels("localhost", '.').collect();
        assert_eq!(got, vec!["localhost"]);
    }

    #[test]
    fn final_label_keeps_its_last_character() {
        let got: Vec<&str> = labels("blabla.com", '.').collect();
        assert_eq!(got.last(), Some(&"com"));
    }

    #[test]
    fn trailing_separator_yields_empty_label() {
        let got: Vec<&str> = labels("a.b.", '.').collect();
        assert_eq!(got, vec!["a", "b", ""]);
    }

    #[test]
    fn consecutive_separators_yield_empty_label() {
        let got: Vec<&str> = labels("a..b", '.').collect();
        assert_eq!(got, vec!["a", "", "b"]);
    }

    #[test]
    fn generic_over_separator() {
        let got: Vec<&str> = labels("one two", ' ').collect();
        assert_eq!(got, vec!["one", "two"]);
    }

    #[test]
    fn labels_alias_the_input() {
        let input = String::from("a.b");
        let first = labels(&input, '.').next().unwrap();
        assert!(std::ptr::eq(first.as_ptr(), input.as_ptr()));
    }
}
