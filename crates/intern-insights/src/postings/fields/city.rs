use crate::postings::domain::UNKNOWN;

/// Keep the part of a location before the first `/`, e.g. `北京/朝阳区` becomes `北京`.
///
/// The segment is trimmed, and a blank leading segment such as `/朝阳区` is `unknown`
/// rather than an empty city.
pub fn normalize_city(location: Option<&str>) -> String {
    location
        .and_then(|value| value.split('/').next())
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_segment() {
        assert_eq!(normalize_city(Some("北京/朝阳区")), "北京");
        assert_eq!(normalize_city(Some("上海/浦东新区/张江")), "上海");
        assert_eq!(normalize_city(Some("深圳")), "深圳");
    }

    #[test]
    fn missing_or_blank_location_is_unknown() {
        assert_eq!(normalize_city(None), UNKNOWN);
        assert_eq!(normalize_city(Some("")), UNKNOWN);
        assert_eq!(normalize_city(Some("/朝阳区")), UNKNOWN);
    }
}
