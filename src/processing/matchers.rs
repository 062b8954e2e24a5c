use super::patterns::{COLLAPSED_DOB_PATTERN, DATE_PARTS_PATTERN, ID_PATTERN, MALE_PATTERN, NON_TEXT_PATTERN};

/// Pull the first ID number out of `text` and repair its check-digit dash.
/// Returns an empty string when nothing looks like an ID.
pub fn correct_id_number(text: &str) -> String {
    match ID_PATTERN.find(text) {
        Some(found) => repair_id_number(found.as_str()),
        None => String::new(),
    }
}

/// Dash repairs for the final segment of an ID number:
/// a 15 character value ending in `-` loses it, then a 14 character value
/// with no dash at position 13 gets one inserted there.
pub fn repair_id_number(candidate: &str) -> String {
    let mut chars: Vec<char> = candidate.chars().collect();

    if chars.len() == 15 && chars[14] == '-' {
        chars.pop();
    }
    if chars.len() == 14 && chars[13] != '-' {
        chars.insert(13, '-');
    }

    chars.into_iter().collect()
}

/// Normalize the first `D/M/YYYY` style date in `text` to `DD/MM/YYYY`.
pub fn normalize_date(text: &str) -> String {
    let Some(captures) = DATE_PARTS_PATTERN.captures(text) else {
        return String::new();
    };

    format!("{:0>2}/{:0>2}/{}", &captures[1], &captures[2], &captures[3])
}

/// Rewrite an 8 character `DD/MYYYY` date of birth as `DD/0M/YYYY`.
/// Any other value is returned untouched.
pub fn repair_collapsed_date(date: &str) -> String {
    if date.chars().count() != 8 {
        return date.to_string();
    }
    COLLAPSED_DOB_PATTERN.replace(date, "$1/0$2/$3").into_owned()
}

/// Strip everything except ASCII letters, digits and whitespace, then trim.
pub fn clean_text(text: &str) -> String {
    NON_TEXT_PATTERN.replace_all(text, "").trim().to_string()
}

/// `M` if the value mentions an m anywhere, otherwise `F`.
pub fn reduce_sex(value: &str) -> String {
    let sex = if MALE_PATTERN.is_match(value) { "M" } else { "F" };
    sex.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_id_number_from_line() {
        assert_eq!(correct_id_number("ID No 123-4567-8901234-5 x"), "123-4567-8901234-5");
        assert_eq!(correct_id_number("no id here"), "");
    }

    #[test]
    fn test_repair_strips_trailing_dash() {
        // 15 chars with a dash last: the dash goes, then the 14 char value
        // gets its check-digit separator.
        assert_eq!(repair_id_number("123-4567-89012-"), "123-4567-8901-2");
    }

    #[test]
    fn test_repair_inserts_missing_dash() {
        let repaired = repair_id_number("123-4567-12345");
        assert_eq!(repaired, "123-4567-1234-5");
        assert_eq!(repaired.chars().nth(13), Some('-'));
    }

    #[test]
    fn test_repair_is_idempotent() {
        for id in ["123-4567-1234-5", "123-4567-8901234", "123-4567-8901234-5", "123-4567-123-4"] {
            let once = repair_id_number(id);
            assert_eq!(repair_id_number(&once), once);
        }
        assert_eq!(repair_id_number("123-4567-123-4"), "123-4567-123-4");
        let corrected = correct_id_number("123-4567-8901234");
        assert_eq!(correct_id_number(&corrected), corrected);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("5/3/2024"), "05/03/2024");
        assert_eq!(normalize_date("15/11/2024"), "15/11/2024");
        assert_eq!(normalize_date("born 1/12/1999 in"), "01/12/1999");
        assert_eq!(normalize_date("2024-03-05"), "");
    }

    #[test]
    fn test_repair_collapsed_date() {
        assert_eq!(repair_collapsed_date("12/31990"), "12/03/1990");
        assert_eq!(repair_collapsed_date("12/05/1990"), "12/05/1990");
        assert_eq!(repair_collapsed_date("abcdefgh"), "abcdefgh");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("John! #Doe123"), "John Doe123");
        assert_eq!(clean_text("  .Ethiopian, "), "Ethiopian");
        assert_eq!(clean_text("!!!"), "");
    }

    #[test]
    fn test_reduce_sex() {
        assert_eq!(reduce_sex("M"), "M");
        assert_eq!(reduce_sex("Male"), "M");
        assert_eq!(reduce_sex("female"), "M");
        assert_eq!(reduce_sex("F"), "F");
        assert_eq!(reduce_sex(""), "F");
    }
}
