//! Process locale resolution

use chrono::Locale;

/// Resolve the process default locale from the environment.
///
/// Checks `LC_ALL`, then `LC_TIME`, then `LANG`, and falls back to
/// [`Locale::POSIX`] when none of them holds a recognizable tag.
pub fn system_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| parse_locale(&value))
        .unwrap_or(Locale::POSIX)
}

/// Parse an environment-style locale tag such as `en_US.UTF-8` or `fr-BE`.
///
/// The encoding suffix is ignored and BCP 47 hyphens are accepted in place
/// of underscores. Returns `None` for empty or unrecognized tags.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let tag = tag.split('.').next().unwrap_or(tag).trim();
    if tag.is_empty() {
        return None;
    }
    if tag == "C" || tag == "POSIX" {
        return Some(Locale::POSIX);
    }
    Locale::try_from(tag.replace('-', "_").as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_encoding_suffix() {
        assert_eq!(parse_locale("en_US.UTF-8"), Some(Locale::en_US));
        assert_eq!(parse_locale("de_DE.ISO-8859-1"), Some(Locale::de_DE));
    }

    #[test]
    fn test_parse_bcp47_hyphens() {
        assert_eq!(parse_locale("fr-BE"), Some(Locale::fr_BE));
    }

    #[test]
    fn test_parse_posix_aliases() {
        assert_eq!(parse_locale("C"), Some(Locale::POSIX));
        assert_eq!(parse_locale("POSIX"), Some(Locale::POSIX));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_locale(""), None);
        assert_eq!(parse_locale("klingon_QO"), None);
    }
}
