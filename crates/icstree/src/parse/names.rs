//! Name canonicalization for components, properties, and parameters.

/// Key of a component-opening content line.
pub(crate) const BEGIN: &str = "BEGIN";

/// Key of a component-closing content line.
pub(crate) const END: &str = "END";

/// Well-known top-level component names and their canonical display names.
const HIGH_LEVEL_COMPONENTS: [(&str, &str); 3] = [
    ("VCALENDAR", "VCalendar"),
    ("VTIMEZONE", "VTimeZone"),
    ("VEVENT", "VEvent"),
];

/// Canonicalizes a raw component, property, or parameter name.
///
/// Applied in order: the well-known component table (`VCALENDAR` maps to
/// `VCalendar` and keeps its mixed case), then stripping the two-character
/// `X-` experimental prefix, then ASCII lowercasing. The same function is
/// used for component, property, and parameter names alike, and lower-case
/// canonical output is a fixed point.
#[must_use]
pub fn canonical_name(raw: &str) -> String {
    if let Some((_, display)) = HIGH_LEVEL_COMPONENTS.iter().find(|(name, _)| *name == raw) {
        return (*display).to_string();
    }

    let stripped = match raw.strip_prefix("X-") {
        Some(rest) if is_experimental_suffix(rest) => rest,
        _ => raw,
    };
    stripped.to_ascii_lowercase()
}

/// Matches the `[\w-]+` tail of the experimental-property pattern.
fn is_experimental_suffix(rest: &str) -> bool {
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_level_components_keep_display_case() {
        assert_eq!(canonical_name("VCALENDAR"), "VCalendar");
        assert_eq!(canonical_name("VTIMEZONE"), "VTimeZone");
        assert_eq!(canonical_name("VEVENT"), "VEvent");
    }

    #[test]
    fn other_components_are_lowercased() {
        assert_eq!(canonical_name("VALARM"), "valarm");
        assert_eq!(canonical_name("DAYLIGHT"), "daylight");
        assert_eq!(canonical_name("STANDARD"), "standard");
    }

    #[test]
    fn experimental_prefix_is_stripped() {
        assert_eq!(canonical_name("X-WR-CALNAME"), "wr-calname");
        assert_eq!(canonical_name("X-LIC-LOCATION"), "lic-location");
    }

    #[test]
    fn bare_experimental_prefix_is_not_stripped() {
        // "X-" alone does not match the experimental pattern.
        assert_eq!(canonical_name("X-"), "x-");
    }

    #[test]
    fn property_and_parameter_names_are_lowercased() {
        assert_eq!(canonical_name("SUMMARY"), "summary");
        assert_eq!(canonical_name("CUTYPE"), "cutype");
        assert_eq!(canonical_name("ROLE"), "role");
    }

    #[test]
    fn idempotent_over_canonical_output() {
        assert_eq!(canonical_name("summary"), "summary");
        assert_eq!(canonical_name("wr-calname"), "wr-calname");
    }
}
