use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Characters left alone when a parameter is spliced into a path segment
const PATH_PARAM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/* Replaces each "{}" in the format string with the next parameter, percent-encoded so that ids can't escape their
 * path segment. */
pub fn vec_with_format_string(format_string: &str, params: Vec<&str>) -> String {
    let parts: Vec<&str> = format_string.split("{}").collect();

    let mut ret = String::new();

    for (i, part) in parts.iter().enumerate().take(parts.len() - 1) {
        ret.push_str(part);
        if let Some(param) = params.get(i) {
            ret.extend(utf8_percent_encode(param, PATH_PARAM));
        }
    }
    if let Some(tail) = parts.last() {
        ret.push_str(tail);
    }
    ret
}

pub fn subfolder_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 subfolder".to_string()),
        n => Some(format!("{n} subfolders")),
    }
}

// "2024-05-01T10:22:31.000Z" -> "2024-05-01"
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use crate::util::format;

    #[test]
    fn endpoint_format() {
        let arg = "access/update-request/{}";
        let params = vec!["65f1c0a2e4b0"];

        assert_eq!("access/update-request/65f1c0a2e4b0", format::vec_with_format_string(arg, params));
    }

    #[test]
    fn endpoint_format_encodes_params() {
        let arg = "access/update-request/{}";
        let params = vec!["../user/employees"];

        assert_eq!("access/update-request/..%2Fuser%2Femployees", format::vec_with_format_string(arg, params));
    }

    #[test]
    fn endpoint_without_params() {
        assert_eq!("file/getAllFolders", format::vec_with_format_string("file/getAllFolders", vec![]));
    }

    #[test]
    fn subfolder_badge() {
        assert_eq!(None, format::subfolder_badge(0));
        assert_eq!(Some("1 subfolder".to_string()), format::subfolder_badge(1));
        assert_eq!(Some("12 subfolders".to_string()), format::subfolder_badge(12));
    }

    #[test]
    fn date_part() {
        assert_eq!("2024-05-01", format::date_part("2024-05-01T10:22:31.000Z"));
        assert_eq!("yesterday", format::date_part("yesterday"));
    }
}
