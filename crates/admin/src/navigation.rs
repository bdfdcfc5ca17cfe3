//! Sidebar navigation.
//!
//! The sidebar shows a fixed list of links. The one whose href equals the
//! current path is marked active; a path that matches nothing is treated as
//! the dashboard.

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

/// Where the logo leads.
pub const LOGO_TARGET: &str = DASHBOARD_PATH;

/// Sidebar entries in display order: `(label, href, icon)`.
const NAV_ITEMS: [(&str, &str, &str); 7] = [
    ("Dashboard", DASHBOARD_PATH, "ph-squares-four"),
    ("In-depth", "/indepth", "ph-chart-line"),
    ("Promotions", "/promotions", "ph-tag"),
    ("Products", "/products", "ph-package"),
    ("Settings", "/settings", "ph-gear"),
    ("Profile", "/profile", "ph-user"),
    ("Logout", LOGOUT_PATH, "ph-sign-out"),
];

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Map a request path to the nav href it belongs to.
///
/// Trailing slashes are ignored, and sub-pages belong to their section
/// (`/products/3/edit` is under `/products`). Empty and unknown paths fall back
/// to the dashboard.
#[must_use]
pub fn section_for(path: &str) -> &'static str {
    let path = path.trim_end_matches('/');
    NAV_ITEMS
        .iter()
        .map(|(_, href, _)| *href)
        .find(|href| {
            path == *href
                || path
                    .strip_prefix(href)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .unwrap_or(DASHBOARD_PATH)
}

/// Build the sidebar for the page at `current_path`.
#[must_use]
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    let section = section_for(current_path);
    NAV_ITEMS
        .iter()
        .map(|&(label, href, icon)| NavLink {
            label,
            href,
            icon,
            active: href == section,
        })
        .collect()
}
