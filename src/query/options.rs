//! Graph request options collected from the form.

/// One graph request's worth of form input.
///
/// Every field is optional; absent fields simply contribute nothing to the
/// encoded path. Fields hold opaque dataset-specific strings (the server
/// defines the time and coordinate formats), so no parsing happens here.
///
/// Text widgets produce empty strings rather than absent values, so inputs
/// should come through [`GraphOptions::from_fields`], which maps
/// empty-after-trim to `None`. Keeping "empty" and "absent" distinct at the
/// type level avoids the ambiguity of presence-checking raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub top_lat: Option<String>,
    pub bottom_lat: Option<String>,
    pub left_lon: Option<String>,
    pub right_lon: Option<String>,
    pub algorithm: Option<String>,
}

impl GraphOptions {
    /// Builds options from raw widget strings, normalizing whitespace-only
    /// and empty values to `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        start_time: &str,
        end_time: &str,
        top_lat: &str,
        bottom_lat: &str,
        left_lon: &str,
        right_lon: &str,
        algorithm: &str,
    ) -> Self {
        Self {
            start_time: normalize(start_time),
            end_time: normalize(end_time),
            top_lat: normalize(top_lat),
            bottom_lat: normalize(bottom_lat),
            left_lon: normalize(left_lon),
            right_lon: normalize(right_lon),
            algorithm: normalize(algorithm),
        }
    }

    /// True when no field is set (an encoded path would be just the base).
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.end_time.is_none()
            && self.top_lat.is_none()
            && self.bottom_lat.is_none()
            && self.left_lon.is_none()
            && self.right_lon.is_none()
            && self.algorithm.is_none()
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_fields_are_absent() {
        let options = GraphOptions::from_fields("", "  ", "\t", "", "", "", "");
        assert!(options.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let options = GraphOptions::from_fields(" 2020-01-01 ", "", "", "", "", "", "kmeans");
        assert_eq!(options.start_time.as_deref(), Some("2020-01-01"));
        assert_eq!(options.algorithm.as_deref(), Some("kmeans"));
        assert!(options.end_time.is_none());
        assert!(!options.is_empty());
    }
}
