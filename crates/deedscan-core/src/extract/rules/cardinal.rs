//! English cardinal number words to numeric values.
//!
//! Handles phrases such as "two hundred fifty thousand", "one million
//! twenty-five" or "ten point five". Words that are not number words
//! ("dollars", "US") are skipped, so currency phrasing around the number does
//! not need to be stripped first. "and" is skipped the same way.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::CardinalError;

type Result<T> = std::result::Result<T, CardinalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    /// zero..nine
    Unit(u64),
    /// ten..nineteen
    Teen(u64),
    /// twenty..ninety
    Tens(u64),
    Hundred,
    Scale(u64, &'static str),
    Point,
}

fn lookup(word: &str) -> Option<Word> {
    let w = match word {
        "zero" => Word::Unit(0),
        "one" => Word::Unit(1),
        "two" => Word::Unit(2),
        "three" => Word::Unit(3),
        "four" => Word::Unit(4),
        "five" => Word::Unit(5),
        "six" => Word::Unit(6),
        "seven" => Word::Unit(7),
        "eight" => Word::Unit(8),
        "nine" => Word::Unit(9),
        "ten" => Word::Teen(10),
        "eleven" => Word::Teen(11),
        "twelve" => Word::Teen(12),
        "thirteen" => Word::Teen(13),
        "fourteen" => Word::Teen(14),
        "fifteen" => Word::Teen(15),
        "sixteen" => Word::Teen(16),
        "seventeen" => Word::Teen(17),
        "eighteen" => Word::Teen(18),
        "nineteen" => Word::Teen(19),
        "twenty" => Word::Tens(20),
        "thirty" => Word::Tens(30),
        "forty" => Word::Tens(40),
        "fifty" => Word::Tens(50),
        "sixty" => Word::Tens(60),
        "seventy" => Word::Tens(70),
        "eighty" => Word::Tens(80),
        "ninety" => Word::Tens(90),
        "hundred" => Word::Hundred,
        "thousand" => Word::Scale(1_000, "thousand"),
        "million" => Word::Scale(1_000_000, "million"),
        "billion" => Word::Scale(1_000_000_000, "billion"),
        "point" => Word::Point,
        _ => return None,
    };
    Some(w)
}

/// Split a phrase into lowercase tokens, hyphenated compounds included,
/// with surrounding punctuation removed.
fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Convert an English number phrase to its value.
///
/// A phrase made only of ASCII digits is parsed directly.
pub fn words_to_number(phrase: &str) -> Result<Decimal> {
    let trimmed = phrase.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Decimal::from_str(trimmed)
            .map_err(|_| CardinalError::MalformedGroup(trimmed.to_string()));
    }

    let words: Vec<Word> = tokenize(phrase).iter().filter_map(|t| lookup(t)).collect();
    if words.is_empty() {
        return Err(CardinalError::NoNumberWords(phrase.to_string()));
    }

    for (name, count) in [
        ("thousand", count_scale(&words, 1_000)),
        ("million", count_scale(&words, 1_000_000)),
        ("billion", count_scale(&words, 1_000_000_000)),
        ("point", words.iter().filter(|w| **w == Word::Point).count()),
    ] {
        if count > 1 {
            return Err(CardinalError::Redundant(name));
        }
    }

    let (integer_words, decimal_words) = match words.iter().position(|w| *w == Word::Point) {
        Some(i) => (&words[..i], &words[i + 1..]),
        None => (&words[..], &[][..]),
    };

    let integer = integer_value(integer_words, phrase)?;
    if decimal_words.is_empty() {
        return Ok(Decimal::from(integer));
    }

    let mut digits = String::with_capacity(decimal_words.len());
    for w in decimal_words {
        match w {
            Word::Unit(d) => digits.push(char::from(b'0' + *d as u8)),
            other => return Err(CardinalError::InvalidDecimal(format!("{:?}", other))),
        }
    }

    Decimal::from_str(&format!("{}.{}", integer, digits))
        .map_err(|_| CardinalError::InvalidDecimal(digits))
}

fn count_scale(words: &[Word], scale: u64) -> usize {
    words
        .iter()
        .filter(|w| matches!(w, Word::Scale(s, _) if *s == scale))
        .count()
}

/// Sum of `group * scale` over scale-delimited groups.
fn integer_value(words: &[Word], phrase: &str) -> Result<u64> {
    let mut total = 0u64;
    let mut group: Vec<Word> = Vec::new();
    let mut last_scale = u64::MAX;

    for w in words {
        match *w {
            Word::Scale(scale, name) => {
                if scale >= last_scale {
                    return Err(CardinalError::OutOfOrder(phrase.to_string()));
                }
                if group.is_empty() {
                    return Err(CardinalError::MissingMultiplier(name));
                }
                total += group_value(&group)? * scale;
                group.clear();
                last_scale = scale;
            }
            other => group.push(other),
        }
    }

    if !group.is_empty() {
        total += group_value(&group)?;
    }

    Ok(total)
}

/// Value of a group below one thousand: `[unit] hundred`, then
/// `tens [unit]`, a teen, or a unit.
fn group_value(group: &[Word]) -> Result<u64> {
    let malformed = || CardinalError::MalformedGroup(format!("{:?}", group));
    let mut i = 0;
    let mut value = 0;

    match group {
        [Word::Unit(u), Word::Hundred, ..] if *u > 0 => {
            value = u * 100;
            i = 2;
        }
        [Word::Hundred, ..] => {
            value = 100;
            i = 1;
        }
        _ => {}
    }

    match group.get(i) {
        Some(Word::Tens(t)) => {
            value += t;
            i += 1;
            if let Some(Word::Unit(u)) = group.get(i) {
                if *u == 0 {
                    return Err(malformed());
                }
                value += u;
                i += 1;
            }
        }
        Some(Word::Teen(t)) => {
            value += t;
            i += 1;
        }
        Some(Word::Unit(u)) => {
            if *u == 0 && group.len() > 1 {
                return Err(malformed());
            }
            value += u;
            i += 1;
        }
        _ => {}
    }

    if i != group.len() {
        return Err(malformed());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(phrase: &str) -> Decimal {
        words_to_number(phrase).unwrap()
    }

    #[test]
    fn test_simple_numbers() {
        assert_eq!(num("zero"), Decimal::ZERO);
        assert_eq!(num("seven"), Decimal::from(7));
        assert_eq!(num("Nineteen"), Decimal::from(19));
        assert_eq!(num("forty-two"), Decimal::from(42));
        assert_eq!(num("hundred"), Decimal::from(100));
    }

    #[test]
    fn test_scaled_numbers() {
        assert_eq!(num("Two Hundred Thousand"), Decimal::from(200_000));
        assert_eq!(num("one hundred fifty thousand"), Decimal::from(150_000));
        assert_eq!(
            num("three million four hundred five thousand twenty one"),
            Decimal::from(3_405_021)
        );
        assert_eq!(num("one billion one"), Decimal::from(1_000_000_001));
        assert_eq!(num("hundred thousand"), Decimal::from(100_000));
    }

    #[test]
    fn test_filler_words_are_skipped() {
        assert_eq!(num("One Hundred And Fifty Thousand"), Decimal::from(150_000));
        assert_eq!(num("Two Hundred Thousand Dollars"), Decimal::from(200_000));
        assert_eq!(num("(Five Thousand) US Dollars"), Decimal::from(5_000));
    }

    #[test]
    fn test_decimal_part() {
        assert_eq!(num("ten point five"), Decimal::from_str("10.5").unwrap());
        assert_eq!(num("point two five"), Decimal::from_str("0.25").unwrap());
        assert!(matches!(
            words_to_number("one point twenty"),
            Err(CardinalError::InvalidDecimal(_))
        ));
    }

    #[test]
    fn test_digit_phrase() {
        assert_eq!(num(" 250000 "), Decimal::from(250_000));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(matches!(
            words_to_number("a fair market amount"),
            Err(CardinalError::NoNumberWords(_))
        ));
        assert!(matches!(words_to_number(""), Err(CardinalError::NoNumberWords(_))));
    }

    #[test]
    fn test_rejects_malformed_phrases() {
        assert_eq!(
            words_to_number("one thousand two thousand"),
            Err(CardinalError::Redundant("thousand"))
        );
        assert!(matches!(
            words_to_number("five thousand two million"),
            Err(CardinalError::OutOfOrder(_))
        ));
        assert_eq!(
            words_to_number("thousand"),
            Err(CardinalError::MissingMultiplier("thousand"))
        );
        assert!(matches!(
            words_to_number("twenty thirty"),
            Err(CardinalError::MalformedGroup(_))
        ));
        assert!(matches!(
            words_to_number("five six"),
            Err(CardinalError::MalformedGroup(_))
        ));
        assert!(matches!(
            words_to_number("twenty zero"),
            Err(CardinalError::MalformedGroup(_))
        ));
    }
}
