//! Token cursor used by the dispatcher.

use crate::error::DriverError;

/// Forward-only cursor over the argument list.
///
/// Each flag handler states how many tokens it consumes by calling
/// [`take`](Self::take) (required value), [`peek`](Self::peek) +
/// [`advance`](Self::advance) (optional value) or
/// [`take_rest`](Self::take_rest).
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: &'a [String],
    pos: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args, pos: 0 }
    }

    /// Next unconsumed token, consuming it.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.args.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    /// Next unconsumed token, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.args.get(self.pos).map(String::as_str)
    }

    /// Consume the token returned by the last [`peek`](Self::peek).
    pub fn advance(&mut self) {
        if self.pos < self.args.len() {
            self.pos += 1;
        }
    }

    /// Consume the value of `flag`; fails naming the flag when the list is exhausted.
    pub fn take(&mut self, flag: &str, what: &str) -> Result<&'a str, DriverError> {
        self.next_token()
            .ok_or_else(|| DriverError::missing_value(flag, what))
    }

    /// Consume every remaining token.
    pub fn take_rest(&mut self) -> &'a [String] {
        let rest = &self.args[self.pos..];
        self.pos = self.args.len();
        rest
    }

    /// Consume tokens until one starts with `-`.
    pub fn take_until_flag(&mut self) -> &'a [String] {
        let start = self.pos;
        while let Some(token) = self.peek() {
            if token.starts_with('-') {
                break;
            }
            self.pos += 1;
        }
        &self.args[start..self.pos]
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.args.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_consumes_values_in_order() {
        let argv = args(&["--api", "out.txt", "--stubs"]);
        let mut cursor = ArgCursor::new(&argv);
        assert_eq!(cursor.next_token(), Some("--api"));
        assert_eq!(cursor.take("--api", "a file").unwrap(), "out.txt");
        assert_eq!(cursor.next_token(), Some("--stubs"));
        assert!(cursor.is_done());
    }

    #[test]
    fn take_at_end_names_the_flag() {
        let argv = args(&["--api"]);
        let mut cursor = ArgCursor::new(&argv);
        cursor.next_token();
        let err = cursor.take("--api", "a file").unwrap_err();
        assert!(err.message.contains("--api"));
    }

    #[test]
    fn peek_does_not_consume() {
        let argv = args(&["a", "b"]);
        let mut cursor = ArgCursor::new(&argv);
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.peek(), Some("a"));
        cursor.advance();
        assert_eq!(cursor.peek(), Some("b"));
    }

    #[test]
    fn take_rest_ends_the_scan() {
        let argv = args(&["--generate-documentation", "javadoc", "-d", "out"]);
        let mut cursor = ArgCursor::new(&argv);
        cursor.next_token();
        assert_eq!(cursor.take_rest(), &argv[1..]);
        assert!(cursor.is_done());
        assert!(cursor.take_rest().is_empty());
    }

    #[test]
    fn take_until_flag_stops_before_dash_token() {
        let argv = args(&["a", "b", "-next", "c"]);
        let mut cursor = ArgCursor::new(&argv);
        assert_eq!(cursor.take_until_flag(), &argv[..2]);
        assert_eq!(cursor.next_token(), Some("-next"));
    }
}
