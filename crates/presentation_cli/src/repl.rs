//! Interactive lookup loop input handling

use domain::{CityName, DomainError};

/// One line of interactive input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Blank line, ignored
    Skip,
    /// `quit` or `exit`
    Quit,
    /// A city to look up
    City(CityName),
    /// A line that is not a valid city name
    Invalid(DomainError),
}

/// Classify one line read from the terminal
#[must_use]
pub fn parse_line(line: &str) -> ReplInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Skip;
    }
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return ReplInput::Quit;
    }
    match CityName::new(trimmed) {
        Ok(city) => ReplInput::City(city),
        Err(e) => ReplInput::Invalid(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), ReplInput::Skip);
        assert_eq!(parse_line("   \t"), ReplInput::Skip);
    }

    #[test]
    fn quit_words_end_the_loop() {
        assert_eq!(parse_line("quit"), ReplInput::Quit);
        assert_eq!(parse_line(" EXIT \n"), ReplInput::Quit);
    }

    #[test]
    fn city_names_are_trimmed() {
        assert_eq!(
            parse_line("  Buenos Aires \n"),
            ReplInput::City(CityName::new("Buenos Aires").unwrap())
        );
    }

    #[test]
    fn overlong_names_are_invalid() {
        let line = "x".repeat(CityName::MAX_LEN + 1);
        assert!(matches!(parse_line(&line), ReplInput::Invalid(_)));
    }
}
