use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw + 1 > max_width {
            result.push('…');
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_untouched() {
        assert_eq!(truncate_string("soup", 10), "soup");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate_string("pea soup with pancakes", 8), "pea sou…");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate_string("寿司寿司", 5), "寿司…");
    }
}
