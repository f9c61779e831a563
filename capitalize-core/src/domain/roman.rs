//! Classical Roman numeral recognition
//!
//! Accepts exactly the uppercase grammar
//! `M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})`, i.e. subtractive
//! notation with up to four leading thousands. The empty string is rejected.

/// Symbols for one decimal place: (one, five, ten)
struct Place {
    one: u8,
    five: u8,
    ten: u8,
    weight: u32,
}

const HUNDREDS: Place = Place {
    one: b'C',
    five: b'D',
    ten: b'M',
    weight: 100,
};

const TENS: Place = Place {
    one: b'X',
    five: b'L',
    ten: b'C',
    weight: 10,
};

const UNITS: Place = Place {
    one: b'I',
    five: b'V',
    ten: b'X',
    weight: 1,
};

const MAX_THOUSANDS: usize = 4;

/// Parse an uppercase classical Roman numeral and return its value.
///
/// Returns `None` for anything outside the grammar, including lowercase
/// input and the empty string.
///
/// ```
/// use capitalize_core::domain::roman;
///
/// assert_eq!(roman::parse("VI"), Some(6));
/// assert_eq!(roman::parse("MCMXCIV"), Some(1994));
/// assert_eq!(roman::parse("IIII"), None);
/// assert_eq!(roman::parse("vi"), None);
/// ```
pub fn parse(numeral: &str) -> Option<u32> {
    if numeral.is_empty() {
        return None;
    }

    let bytes = numeral.as_bytes();
    let mut pos = 0;

    let thousands = bytes.iter().take_while(|&&b| b == b'M').count();
    if thousands > MAX_THOUSANDS {
        return None;
    }
    pos += thousands;
    let mut value = thousands as u32 * 1000;

    for place in [&HUNDREDS, &TENS, &UNITS] {
        let (digit, consumed) = parse_place(&bytes[pos..], place);
        value += digit * place.weight;
        pos += consumed;
    }

    (pos == bytes.len()).then_some(value)
}

/// Whether `token` is a non-empty uppercase classical Roman numeral
pub fn is_roman_numeral(token: &str) -> bool {
    parse(token).is_some()
}

/// Consume one decimal place, returning (digit, bytes consumed).
///
/// Matches `one ten | one five | five? one{0,3}`; an empty match is valid.
fn parse_place(bytes: &[u8], place: &Place) -> (u32, usize) {
    match bytes {
        [a, b, ..] if *a == place.one && *b == place.ten => (9, 2),
        [a, b, ..] if *a == place.one && *b == place.five => (4, 2),
        _ => {
            let mut pos = 0;
            let mut digit = 0;

            if bytes.first() == Some(&place.five) {
                digit = 5;
                pos = 1;
            }

            let ones = bytes[pos..]
                .iter()
                .take(3)
                .take_while(|&&b| b == place.one)
                .count();

            (digit + ones as u32, pos + ones)
        }
    }
}
