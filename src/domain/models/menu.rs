/// Icons available to menu entries, rendered as inline glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Chart,
    Signup,
    Plus,
    Hourglass,
    History,
    Projects,
    Folder,
    Check,
    Finance,
    Invoice,
    Wallet,
    Percent,
    Support,
    Profile,
    Settings,
    Lock,
}

impl MenuIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Dashboard => "🏠",
            MenuIcon::Chart => "📈",
            MenuIcon::Signup => "📝",
            MenuIcon::Plus => "➕",
            MenuIcon::Hourglass => "⏳",
            MenuIcon::History => "🕘",
            MenuIcon::Projects => "🏗️",
            MenuIcon::Folder => "📂",
            MenuIcon::Check => "✅",
            MenuIcon::Finance => "💰",
            MenuIcon::Invoice => "🧾",
            MenuIcon::Wallet => "👛",
            MenuIcon::Percent => "📊",
            MenuIcon::Support => "🛟",
            MenuIcon::Profile => "👤",
            MenuIcon::Settings => "⚙️",
            MenuIcon::Lock => "🔒",
        }
    }

    /// Name used for the `data-icon` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuIcon::Dashboard => "dashboard",
            MenuIcon::Chart => "chart",
            MenuIcon::Signup => "signup",
            MenuIcon::Plus => "plus",
            MenuIcon::Hourglass => "hourglass",
            MenuIcon::History => "history",
            MenuIcon::Projects => "projects",
            MenuIcon::Folder => "folder",
            MenuIcon::Check => "check",
            MenuIcon::Finance => "finance",
            MenuIcon::Invoice => "invoice",
            MenuIcon::Wallet => "wallet",
            MenuIcon::Percent => "percent",
            MenuIcon::Support => "support",
            MenuIcon::Profile => "profile",
            MenuIcon::Settings => "settings",
            MenuIcon::Lock => "lock",
        }
    }
}

/// Leaf navigation entry inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChild {
    pub display_name: &'static str,
    pub href: &'static str,
    pub icon: MenuIcon,
}

/// Top-level collapsible menu group.
///
/// A section carries a direct link, a list of children, or both. An empty
/// `children` slice means the section renders as a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub id: &'static str,
    pub display_name: &'static str,
    pub icon: MenuIcon,
    pub direct_href: Option<&'static str>,
    pub children: &'static [MenuChild],
}

impl MenuSection {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Child whose href equals `href` exactly
    pub fn child_by_href(&self, href: &str) -> Option<&MenuChild> {
        self.children.iter().find(|child| child.href == href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHILDREN: &[MenuChild] = &[
        MenuChild { display_name: "One", href: "/a/one", icon: MenuIcon::Plus },
        MenuChild { display_name: "Two", href: "/a/two", icon: MenuIcon::Check },
    ];

    #[test]
    fn test_child_by_href_exact_only() {
        let section = MenuSection {
            id: "a",
            display_name: "A",
            icon: MenuIcon::Folder,
            direct_href: None,
            children: CHILDREN,
        };

        assert_eq!(section.child_by_href("/a/two").map(|c| c.display_name), Some("Two"));
        assert!(section.child_by_href("/a/tw").is_none());
        assert!(section.child_by_href("/a/two/extra").is_none());
        assert!(section.has_children());
    }

    #[test]
    fn test_link_only_section_has_no_children() {
        let section = MenuSection {
            id: "support",
            display_name: "Support",
            icon: MenuIcon::Support,
            direct_href: Some("/support"),
            children: &[],
        };
        assert!(!section.has_children());
    }

    #[test]
    fn test_icon_names_are_lowercase() {
        for icon in [MenuIcon::Dashboard, MenuIcon::Hourglass, MenuIcon::Lock] {
            assert_eq!(icon.as_str(), icon.as_str().to_lowercase());
            assert!(!icon.glyph().is_empty());
        }
    }
}
