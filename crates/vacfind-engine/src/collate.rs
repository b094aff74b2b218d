//! Natural alphabetical ordering for city and country names.
//!
//! Names are compared in three passes, the way a dictionary orders them:
//!
//! 1. base letters, ignoring accents and case (`"são"` sits with `"sao"`)
//! 2. unaccented before accented
//! 3. lowercase before uppercase
//!
//! A final byte comparison keeps the order total for distinct strings.

use std::cmp::Ordering;

pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = base_letters(a).cmp(base_letters(b));
    primary
        .then_with(|| accent_marks(a).cmp(accent_marks(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(|c| fold_accent(c).to_lowercase())
        .flat_map(expand_ligature)
}

fn accent_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|c| fold_accent(c) != c)
}

fn case_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn expand_ligature(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'ß' => ('s', Some('s')),
        'æ' => ('a', Some('e')),
        'œ' => ('o', Some('e')),
        other => (other, None),
    };
    std::iter::once(first).chain(second)
}

/// Strip the diacritic from common Latin letters; other characters pass through
fn fold_accent(c: char) -> char {
    match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ď' | 'Đ' => 'D',
        'ď' | 'đ' => 'd',
        'È'..='Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'Ğ' | 'Ģ' => 'G',
        'ğ' | 'ģ' => 'g',
        'Ì'..='Ï' | 'Ī' | 'Į' | 'İ' => 'I',
        'ì'..='ï' | 'ī' | 'į' | 'ı' => 'i',
        'Ķ' => 'K',
        'ķ' => 'k',
        'Ł' | 'Ļ' | 'Ľ' => 'L',
        'ł' | 'ļ' | 'ľ' => 'l',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ř' => 'R',
        'ř' => 'r',
        'Ś' | 'Ş' | 'Š' | 'Ș' => 'S',
        'ś' | 'ş' | 'š' | 'ș' => 's',
        'Ţ' | 'Ť' | 'Ț' => 'T',
        'ţ' | 'ť' | 'ț' => 't',
        'Ù'..='Ü' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| collate(a, b));
        names
    }

    #[test]
    fn test_case_does_not_split_alphabet() {
        // Byte order would put "Zagreb" before "amsterdam"
        assert_eq!(
            sorted(&["Zagreb", "amsterdam", "Berlin"]),
            vec!["amsterdam", "Berlin", "Zagreb"]
        );
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zürich", "São Paulo", "Salvador", "Sydney"]),
            vec!["Salvador", "São Paulo", "Sydney", "Zürich"]
        );
        assert_eq!(
            sorted(&["Kraków", "Krakow"]),
            vec!["Krakow", "Kraków"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(collate("nice", "Nice"), Ordering::Less);
        assert_eq!(collate("Nice", "nice"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings_are_equal() {
        assert_eq!(collate("Lima", "Lima"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(collate("York", "Yorkshire"), Ordering::Less);
    }
}
