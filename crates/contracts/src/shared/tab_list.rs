//! What the tab list shows, independent of how it is drawn.

use serde::Serialize;

use super::destination::{active_destination, Destination};
use crate::enums::{Platform, ThemeColor};

/// Label of the outbound documentation button.
pub const DOC_LABEL: &str = "Doc";

/// Target of a tab button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum TabTarget {
    Route(String),
    External(String),
}

impl TabTarget {
    pub fn href(&self) -> &str {
        match self {
            TabTarget::Route(href) | TabTarget::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, TabTarget::External(_))
    }

    /// ARIA role of the button; outbound links are plain links, not tabs.
    pub fn aria_role(&self) -> &'static str {
        match self {
            TabTarget::Route(_) => "tab",
            TabTarget::External(_) => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabButtonModel {
    pub key: String,
    pub label: String,
    pub target: TabTarget,
    pub is_focused: bool,
    /// Glyph name shown after the label.
    pub icon: Option<&'static str>,
}

impl TabButtonModel {
    pub fn for_destination(destination: &Destination, is_focused: bool) -> Self {
        Self {
            key: destination.name.to_string(),
            label: destination.label.to_string(),
            target: TabTarget::Route(destination.route.to_string()),
            is_focused,
            icon: None,
        }
    }

    /// Outbound documentation link. Never focused.
    pub fn docs(url: &str, platform: Platform) -> Self {
        Self {
            key: "docs".to_string(),
            label: DOC_LABEL.to_string(),
            target: TabTarget::External(url.to_string()),
            is_focused: false,
            icon: Some(platform.link_glyph()),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.is_focused
    }

    pub fn label_color(&self) -> ThemeColor {
        tab_label_color(self.is_focused)
    }
}

pub fn tab_label_color(is_focused: bool) -> ThemeColor {
    if is_focused {
        ThemeColor::Tint
    } else {
        ThemeColor::TextSecondary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabListModel {
    pub brand: String,
    pub buttons: Vec<TabButtonModel>,
}

/// Brand label, one button per destination in declared order, and the docs
/// button on the web platform.
pub fn build_tab_list(
    brand: &str,
    destinations: &[Destination],
    pathname: &str,
    platform: Platform,
    docs_url: &str,
) -> TabListModel {
    // First match wins, so at most one button is focused.
    let active = active_destination(destinations, pathname);
    let mut buttons: Vec<TabButtonModel> = destinations
        .iter()
        .map(|d| TabButtonModel::for_destination(d, active.is_some_and(|a| std::ptr::eq(a, d))))
        .collect();
    if platform.is_web() {
        buttons.push(TabButtonModel::docs(docs_url, platform));
    }
    TabListModel {
        brand: brand.to_string(),
        buttons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::destination::DESTINATIONS;

    const DOCS: &str = "https://docs.expo.dev";

    #[test]
    fn test_explore_active_on_native() {
        let model = build_tab_list("Brand", &DESTINATIONS, "/explore", Platform::Ios, DOCS);
        assert_eq!(model.brand, "Brand");
        let keys: Vec<_> = model.buttons.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["home", "explore", "tv_focus"]);
        let disabled: Vec<_> = model.buttons.iter().map(|b| b.is_disabled()).collect();
        assert_eq!(disabled, [false, true, false]);
    }

    #[test]
    fn test_label_colors_follow_active_flag() {
        let model = build_tab_list("Brand", &DESTINATIONS, "/", Platform::Android, DOCS);
        assert_eq!(model.buttons[0].label_color(), ThemeColor::Tint);
        assert_eq!(model.buttons[1].label_color(), ThemeColor::TextSecondary);
        assert_eq!(model.buttons[2].label_color(), ThemeColor::TextSecondary);
    }

    #[test]
    fn test_docs_button_only_on_web() {
        for platform in [
            Platform::Ios,
            Platform::Android,
            Platform::Macos,
            Platform::Windows,
        ] {
            let model = build_tab_list("Brand", &DESTINATIONS, "/", platform, DOCS);
            assert!(model.buttons.iter().all(|b| b.key != "docs"));
        }

        let model = build_tab_list("Brand", &DESTINATIONS, "/", Platform::Web, DOCS);
        assert_eq!(model.buttons.len(), 4);
        let docs = &model.buttons[3];
        assert_eq!(docs.target, TabTarget::External(DOCS.to_string()));
        assert!(!docs.is_focused);
        assert_eq!(docs.icon, Some("link"));
        assert_eq!(docs.label, DOC_LABEL);
    }

    #[test]
    fn test_explore_active_on_web_with_docs_last() {
        let model = build_tab_list("Brand", &DESTINATIONS, "/explore", Platform::Web, DOCS);
        let disabled: Vec<_> = model.buttons.iter().map(|b| b.is_disabled()).collect();
        assert_eq!(disabled, [false, true, false, false]);
        let keys: Vec<_> = model.buttons.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["home", "explore", "tv_focus", "docs"]);
        let last = &model.buttons[3];
        assert!(last.target.is_external());
        assert_eq!(last.label_color(), ThemeColor::TextSecondary);
    }

    #[test]
    fn test_single_active_button_with_duplicate_routes() {
        let twins = [DESTINATIONS[1], DESTINATIONS[1]];
        let model = build_tab_list("Brand", &twins, "/explore", Platform::Ios, DOCS);
        let disabled: Vec<_> = model.buttons.iter().map(|b| b.is_disabled()).collect();
        assert_eq!(disabled, [true, false]);
        let model = build_tab_list("Brand", &DESTINATIONS, "/missing", Platform::Ios, DOCS);
        assert!(model.buttons.iter().all(|b| !b.is_disabled()));
    }

    #[test]
    fn test_aria_roles() {
        let model = build_tab_list("Brand", &DESTINATIONS, "/", Platform::Web, DOCS);
        let roles: Vec<_> = model.buttons.iter().map(|b| b.target.aria_role()).collect();
        assert_eq!(roles, ["tab", "tab", "tab", "link"]);
    }
}
