use serde::Serialize;

/// Named navigable target bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub name: &'static str,
    pub route: &'static str,
    pub label: &'static str,
}

pub const HOME: Destination = Destination {
    name: "home",
    route: "/",
    label: "Home",
};

pub const EXPLORE: Destination = Destination {
    name: "explore",
    route: "/explore",
    label: "Explore",
};

pub const TV_FOCUS: Destination = Destination {
    name: "tv_focus",
    route: "/tv_focus",
    label: "Events",
};

/// Tab destinations in display order.
pub const DESTINATIONS: [Destination; 3] = [HOME, EXPLORE, TV_FOCUS];

impl Destination {
    /// Whether `pathname` addresses this destination. Trailing slashes are
    /// ignored; `/` only matches the root itself.
    pub fn matches(&self, pathname: &str) -> bool {
        normalize(pathname) == normalize(self.route)
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Destination addressed by `pathname`, if any.
pub fn active_destination<'a>(
    destinations: &'a [Destination],
    pathname: &str,
) -> Option<&'a Destination> {
    destinations.iter().find(|d| d.matches(pathname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(HOME.matches("/"));
        assert!(HOME.matches(""));
        assert!(!HOME.matches("/explore"));
        assert!(EXPLORE.matches("/explore/"));
        assert!(!EXPLORE.matches("/explorer"));
        assert!(TV_FOCUS.matches("/tv_focus"));
    }

    #[test]
    fn test_active_destination() {
        assert_eq!(
            active_destination(&DESTINATIONS, "/tv_focus").map(|d| d.name),
            Some("tv_focus")
        );
        assert_eq!(active_destination(&DESTINATIONS, "/missing"), None);
    }
}
