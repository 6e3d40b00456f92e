//! Building graph request paths from form options.
//!
//! Segments appear in fixed order (algorithm, grid, time) and an absent
//! segment contributes nothing, so the output never contains empty path
//! components.

use super::options::GraphOptions;

/// Encodes a graph request path: `base` plus a `/`-prefixed segment for each
/// parameter group that is present.
///
/// With no options set, the result is just `base`.
pub fn encode_path(base: &str, options: &GraphOptions) -> String {
    let segments = [
        encode_algorithm(options.algorithm.as_deref()),
        encode_grid(
            options.top_lat.as_deref(),
            options.bottom_lat.as_deref(),
            options.left_lon.as_deref(),
            options.right_lon.as_deref(),
        ),
        encode_time(options.start_time.as_deref(), options.end_time.as_deref()),
    ];

    let mut path = base.to_string();
    for segment in segments.into_iter().flatten() {
        path.push('/');
        path.push_str(&segment);
    }
    path
}

/// Algorithm segment: the literal `ALG` marker followed by the name.
fn encode_algorithm(algorithm: Option<&str>) -> Option<String> {
    algorithm.map(|alg| format!("ALG{}", alg))
}

/// Time segment.
///
/// A single time point (start == end) encodes as the bare value. A range
/// encodes as `<start>ST<end>ED`, where either half may stand alone to mean
/// an open-ended range. Both absent means no segment.
fn encode_time(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (None, None) => None,
        (Some(s), Some(e)) if s == e => Some(s.to_string()),
        (start, end) => {
            let mut segment = String::new();
            if let Some(s) = start {
                segment.push_str(s);
                segment.push_str("ST");
            }
            if let Some(e) = end {
                segment.push_str(e);
                segment.push_str("ED");
            }
            Some(segment)
        }
    }
}

/// Grid segment: latitude clause (`<top>T[<bottom>B]`) then longitude clause
/// (`<left>L[<right>R]`), concatenated with no separator.
///
/// Gate: without `top` or `left` there is no grid segment at all. A bare
/// `bottom` or `right` never opens its clause either; the server treats a
/// lone edge as a degenerate range. This matches the deployed server's
/// parser, which anchors its grid pattern on the T and L markers.
fn encode_grid(
    top: Option<&str>,
    bottom: Option<&str>,
    left: Option<&str>,
    right: Option<&str>,
) -> Option<String> {
    if top.is_none() && left.is_none() {
        return None;
    }

    let mut segment = String::new();
    if let Some(t) = top {
        segment.push_str(t);
        segment.push('T');
        if let Some(b) = bottom {
            segment.push_str(b);
            segment.push('B');
        }
    }
    if let Some(l) = left {
        segment.push_str(l);
        segment.push('L');
        if let Some(r) = right {
            segment.push_str(r);
            segment.push('R');
        }
    }
    Some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_single_point_encodes_bare() {
        assert_eq!(
            encode_time(Some("2020-01-01"), Some("2020-01-01")),
            Some("2020-01-01".to_string())
        );
    }

    #[test]
    fn test_time_range() {
        assert_eq!(
            encode_time(Some("2020-01-01"), Some("2020-01-05")),
            Some("2020-01-01ST2020-01-05ED".to_string())
        );
    }

    #[test]
    fn test_time_open_ended() {
        assert_eq!(encode_time(Some("t1"), None), Some("t1ST".to_string()));
        assert_eq!(encode_time(None, Some("t2")), Some("t2ED".to_string()));
    }

    #[test]
    fn test_time_absent() {
        assert_eq!(encode_time(None, None), None);
    }

    #[test]
    fn test_grid_full_box() {
        assert_eq!(
            encode_grid(Some("10"), Some("5"), Some("-20"), Some("-10")),
            Some("10T5B-20L-10R".to_string())
        );
    }

    #[test]
    fn test_grid_top_only() {
        assert_eq!(encode_grid(Some("10"), None, None, None), Some("10T".to_string()));
    }

    #[test]
    fn test_grid_left_only() {
        assert_eq!(
            encode_grid(None, None, Some("-20"), None),
            Some("-20L".to_string())
        );
    }

    #[test]
    fn test_grid_gate_requires_top_or_left() {
        // bottom/right alone never produce a segment, whatever their values
        assert_eq!(encode_grid(None, Some("5"), None, None), None);
        assert_eq!(encode_grid(None, None, None, Some("-10")), None);
        assert_eq!(encode_grid(None, Some("0"), None, Some("180")), None);
    }

    #[test]
    fn test_grid_clauses_are_independent_past_the_gate() {
        // A passing gate does not conjure the other clause
        assert_eq!(
            encode_grid(Some("10"), Some("5"), None, None),
            Some("10T5B".to_string())
        );
        assert_eq!(
            encode_grid(None, None, Some("-20"), Some("-10")),
            Some("-20L-10R".to_string())
        );
        // A stray bottom with only left present is dropped, not misplaced
        assert_eq!(
            encode_grid(None, Some("5"), Some("-20"), None),
            Some("-20L".to_string())
        );
    }

    #[test]
    fn test_path_all_segments_in_order() {
        let options = GraphOptions {
            start_time: Some("2020-01-01".into()),
            end_time: Some("2020-01-05".into()),
            top_lat: Some("10".into()),
            bottom_lat: Some("5".into()),
            left_lon: Some("-20".into()),
            right_lon: Some("-10".into()),
            algorithm: Some("kmeans".into()),
        };
        assert_eq!(
            encode_path("buoy42", &options),
            "buoy42/ALGkmeans/10T5B-20L-10R/2020-01-01ST2020-01-05ED"
        );
    }

    #[test]
    fn test_path_single_time_point_scenario() {
        let options = GraphOptions {
            start_time: Some("t1".into()),
            end_time: Some("t1".into()),
            top_lat: Some("30".into()),
            bottom_lat: Some("20".into()),
            left_lon: Some("-100".into()),
            right_lon: Some("-90".into()),
            algorithm: Some("svm".into()),
        };
        assert_eq!(encode_path("ocean1", &options), "ocean1/ALGsvm/30T20B-100L-90R/t1");
    }

    #[test]
    fn test_path_no_options_is_bare_base() {
        assert_eq!(encode_path("ocean1", &GraphOptions::default()), "ocean1");
    }

    #[test]
    fn test_path_never_emits_empty_components() {
        // Time-only request: no // where algorithm and grid would have been
        let options = GraphOptions {
            start_time: Some("t1".into()),
            ..Default::default()
        };
        let path = encode_path("ds", &options);
        assert_eq!(path, "ds/t1ST");
        assert!(!path.contains("//"));
        assert!(!path.ends_with('/'));

        // Gated-out grid contributes nothing either
        let options = GraphOptions {
            bottom_lat: Some("5".into()),
            algorithm: Some("svm".into()),
            ..Default::default()
        };
        assert_eq!(encode_path("ds", &options), "ds/ALGsvm");
    }
}
