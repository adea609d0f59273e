//! Ссылки навигации и правило подсветки активного пункта.

use serde::{Deserialize, Serialize};

use crate::shared::search::Searchable;

/// Корневые разделы подсвечиваются только при точном совпадении пути
pub const SECTION_ROOTS: &[&str] = &["/", "/admin"];

/// Пункт меню (навбар сайта, мобильное меню)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Быстрая ссылка в результатах поиска навбара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub href: String,
}

impl QuickLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

impl Searchable for QuickLink {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
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

/// Активен ли пункт меню `href` для текущего пути.
///
/// Совпадение по префиксу учитывает только границу сегмента:
/// `/admin/destinations/5` подсвечивает `/admin/destinations`,
/// а `/admin/destinations-archive` нет. Якорные ссылки (`#about`)
/// по пути не подсвечиваются.
pub fn is_nav_active(pathname: &str, href: &str) -> bool {
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    let path = normalize(pathname);
    let href = normalize(href);

    if SECTION_ROOTS.contains(&href) {
        return path == href;
    }

    match path.strip_prefix(href) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_exactly() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/about", "/"));
        assert!(is_nav_active("/admin", "/admin"));
        assert!(is_nav_active("/admin/", "/admin"));
        assert!(!is_nav_active("/admin/bookings", "/admin"));
    }

    #[test]
    fn test_nested_route_activates_parent() {
        assert!(is_nav_active("/admin/destinations", "/admin/destinations"));
        assert!(is_nav_active("/admin/destinations/5", "/admin/destinations"));
        assert!(is_nav_active("/packages/mogadishu-3days/book", "/packages"));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_not_active() {
        assert!(!is_nav_active("/admin/destinations-archive", "/admin/destinations"));
        assert!(!is_nav_active("/gallery2", "/gallery"));
        assert!(!is_nav_active("/admin/pay", "/admin/payments"));
    }

    #[test]
    fn test_anchor_links_are_never_active() {
        assert!(!is_nav_active("/", "#home"));
        assert!(!is_nav_active("/about", "#about"));
        assert!(!is_nav_active("/", ""));
    }

    #[test]
    fn test_quick_link_search() {
        let links = vec![QuickLink::new("About Us", "#about"), QuickLink::new("Contact", "#contact")];
        assert_eq!(crate::shared::search::filter(&links, "CON").len(), 1);
        assert!(crate::shared::search::filter(&links, "#").is_empty());
    }
}
