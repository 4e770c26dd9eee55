use std::{cmp::Ordering, collections::HashMap};

/// Values bound by the dynamic segments of a pattern, keyed by parameter name
pub type Params = HashMap<String, String>;

/// Split a path or pattern into its non-empty `/`-separated segments.
///
/// Leading, trailing and repeated separators produce no segments, so `"/"`
/// and `""` both yield nothing.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched by exact string equality
    Static(String),

    /// `:name`, binds whatever the location has at this position
    Dynamic(String),
}

impl Segment {
    fn parse(segment: &str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            Segment::Dynamic(name.to_string())
        } else {
            Segment::Static(segment.to_string())
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Segment::Dynamic(_))
    }
}

/// A route pattern that can match paths and extract parameters
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Create a new route pattern from a path like "/resources/:id/subpage"
    pub fn new(pattern: &str) -> Self {
        RoutePattern {
            pattern: pattern.to_string(),
            segments: segments(pattern).map(Segment::parse).collect(),
        }
    }

    /// Check if a location matches this pattern and extract parameters
    pub fn matches(&self, location: &str) -> Option<Params> {
        let location: Vec<&str> = segments(location).collect();
        self.matches_segments(&location)
    }

    /// Match against a location that has already been split into segments.
    ///
    /// Only the first `self.segments().len()` location segments take part;
    /// anything past the end of the pattern is ignored, so `/users` matches
    /// `/users/42/extra`. A location shorter than the pattern never matches.
    pub fn matches_segments(&self, location: &[&str]) -> Option<Params> {
        if self.segments.len() > location.len() {
            return None;
        }

        let mut params = Params::new();

        for (pattern_seg, location_seg) in self.segments.iter().zip(location) {
            match pattern_seg {
                Segment::Static(literal) => {
                    if literal != location_seg {
                        return None;
                    }
                }
                Segment::Dynamic(name) => {
                    // a repeated name keeps the last binding
                    params.insert(name.clone(), location_seg.to_string());
                }
            }
        }

        Some(params)
    }

    /// Compare how specific two patterns are. `Greater` means `self` should
    /// be tried first.
    ///
    /// Deeper patterns always win. At equal depth the first position where
    /// one segment is static and the other dynamic decides in favour of the
    /// static one; if there is none the patterns are equally specific.
    pub fn cmp_specificity(&self, other: &RoutePattern) -> Ordering {
        self.segments
            .len()
            .cmp(&other.segments.len())
            .then_with(|| {
                self.segments
                    .iter()
                    .zip(&other.segments)
                    .find_map(|(ours, theirs)| {
                        match (ours.is_dynamic(), theirs.is_dynamic()) {
                            (false, true) => Some(Ordering::Greater),
                            (true, false) => Some(Ordering::Less),
                            _ => None,
                        }
                    })
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        RoutePattern::new(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_segments_skip_empty_parts() {
        assert_eq!(segments("/users//42/").collect::<Vec<_>>(), vec!["users", "42"]);
        assert_eq!(segments("/").count(), 0);
        assert_eq!(segments("").count(), 0);
    }

    #[test]
    fn test_parse_segments() {
        let pattern = RoutePattern::new("/resources/:id/subpage");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Static("resources".to_string()),
                Segment::Dynamic("id".to_string()),
                Segment::Static("subpage".to_string()),
            ]
        );
        assert_eq!(pattern.pattern(), "/resources/:id/subpage");
    }

    #[test]
    fn test_exact_match() {
        let pattern = RoutePattern::new("/users/list");
        assert_eq!(pattern.matches("/users/list"), Some(Params::new()));
        assert!(pattern.matches("/users/other").is_none());
        assert!(pattern.matches("/users").is_none());
    }

    #[test]
    fn test_single_param() {
        let pattern = RoutePattern::new("/users/:id");

        assert_eq!(
            pattern.matches("/users/42"),
            Some(hashmap! { "id".to_string() => "42".to_string() })
        );
        assert!(pattern.matches("/accounts/42").is_none());
    }

    #[test]
    fn test_multiple_params() {
        let pattern = RoutePattern::new("/resources/:id/comments/:comment_id");

        let params = pattern.matches("/resources/123/comments/456").unwrap();
        assert_eq!(params.get("id"), Some(&"123".to_string()));
        assert_eq!(params.get("comment_id"), Some(&"456".to_string()));

        assert!(pattern.matches("/resources/123/comments").is_none());
    }

    #[test]
    fn test_longer_location_matches_prefix() {
        let pattern = RoutePattern::new("/users");
        assert_eq!(pattern.matches("/users/42/extra"), Some(Params::new()));

        let pattern = RoutePattern::new("/users/:id");
        assert_eq!(
            pattern.matches("/users/42/extra"),
            Some(hashmap! { "id".to_string() => "42".to_string() })
        );
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let root = RoutePattern::new("/");
        assert!(root.segments().is_empty());
        assert_eq!(root.matches("/"), Some(Params::new()));
        assert_eq!(root.matches(""), Some(Params::new()));
        assert_eq!(root.matches("/anything/at/all"), Some(Params::new()));
    }

    #[test]
    fn test_duplicate_param_last_wins() {
        let pattern = RoutePattern::new("/:id/:id");
        assert_eq!(
            pattern.matches("/first/second"),
            Some(hashmap! { "id".to_string() => "second".to_string() })
        );
    }

    #[test]
    fn test_trailing_and_repeated_slashes() {
        let pattern = RoutePattern::new("//users/:id/");
        assert!(pattern.matches("/users/123").is_some());
        assert!(pattern.matches("/users/123/").is_some());
        assert!(pattern.matches("users//123").is_some());
    }

    #[test]
    fn test_static_match_is_case_sensitive() {
        let pattern = RoutePattern::new("/Users");
        assert!(pattern.matches("/users").is_none());
    }

    #[test]
    fn test_deeper_pattern_is_more_specific() {
        let deep = RoutePattern::new("/a/:b/c");
        let shallow = RoutePattern::new("/x/:y");
        assert_eq!(deep.cmp_specificity(&shallow), Ordering::Greater);
        assert_eq!(shallow.cmp_specificity(&deep), Ordering::Less);

        // depth wins even against a fully static shorter pattern
        let dynamic = RoutePattern::new("/:a/:b");
        let literal = RoutePattern::new("/about");
        assert_eq!(dynamic.cmp_specificity(&literal), Ordering::Greater);
    }

    #[test]
    fn test_static_beats_dynamic_at_first_difference() {
        let active = RoutePattern::new("/users/active");
        let by_id = RoutePattern::new("/users/:id");
        assert_eq!(active.cmp_specificity(&by_id), Ordering::Greater);
        assert_eq!(by_id.cmp_specificity(&active), Ordering::Less);

        // only the first differing position counts
        let left = RoutePattern::new("/a/:b/:c");
        let right = RoutePattern::new("/:a/b/c");
        assert_eq!(left.cmp_specificity(&right), Ordering::Greater);
    }

    #[test]
    fn test_same_shape_is_equal() {
        let users = RoutePattern::new("/users/:id");
        let teams = RoutePattern::new("/teams/:name");
        assert_eq!(users.cmp_specificity(&teams), Ordering::Equal);
        assert_eq!(
            RoutePattern::new("").cmp_specificity(&RoutePattern::new("/")),
            Ordering::Equal
        );
    }
}
