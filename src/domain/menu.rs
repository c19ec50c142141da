//! Franchisee portal menu definition and its static audit.

use std::collections::HashSet;

use crate::domain::models::{MenuChild, MenuIcon, MenuSection};
use crate::shared::errors::ShellError;

/// Section expanded when the panel first mounts
pub const DEFAULT_EXPANDED_SECTION: &str = "dashboard";

/// Landing page of the portal
pub const HOME_HREF: &str = "/franchisee/dashboard";

pub const FRANCHISEE_MENU: &[MenuSection] = &[
    MenuSection {
        id: "dashboard",
        display_name: "Dashboard",
        icon: MenuIcon::Dashboard,
        direct_href: Some("/franchisee/dashboard"),
        children: &[
            MenuChild {
                display_name: "Franchise Dashboard",
                href: "/franchisee/dashboard",
                icon: MenuIcon::Dashboard,
            },
            MenuChild {
                display_name: "Performance",
                href: "/franchisee/dashboard/performance",
                icon: MenuIcon::Chart,
            },
        ],
    },
    MenuSection {
        id: "project_signup",
        display_name: "Project Signup",
        icon: MenuIcon::Signup,
        direct_href: None,
        children: &[
            MenuChild {
                display_name: "New Signup",
                href: "/franchisee/project-signup/new",
                icon: MenuIcon::Plus,
            },
            MenuChild {
                display_name: "Pending Signups",
                href: "/franchisee/project-signup/pending",
                icon: MenuIcon::Hourglass,
            },
            MenuChild {
                display_name: "Signup History",
                href: "/franchisee/project-signup/history",
                icon: MenuIcon::History,
            },
        ],
    },
    MenuSection {
        id: "projects",
        display_name: "Projects",
        icon: MenuIcon::Projects,
        direct_href: None,
        children: &[
            MenuChild {
                display_name: "Active Projects",
                href: "/franchisee/projects/active",
                icon: MenuIcon::Folder,
            },
            MenuChild {
                display_name: "Completed Projects",
                href: "/franchisee/projects/completed",
                icon: MenuIcon::Check,
            },
        ],
    },
    MenuSection {
        id: "finance",
        display_name: "Finance",
        icon: MenuIcon::Finance,
        direct_href: None,
        children: &[
            MenuChild {
                display_name: "Invoices",
                href: "/franchisee/finance/invoices",
                icon: MenuIcon::Invoice,
            },
            MenuChild {
                display_name: "Payouts",
                href: "/franchisee/finance/payouts",
                icon: MenuIcon::Wallet,
            },
            MenuChild {
                display_name: "Royalties",
                href: "/franchisee/finance/royalties",
                icon: MenuIcon::Percent,
            },
        ],
    },
    MenuSection {
        id: "support",
        display_name: "Support",
        icon: MenuIcon::Support,
        direct_href: Some("/franchisee/support"),
        children: &[],
    },
    MenuSection {
        id: "profile",
        display_name: "Profile",
        icon: MenuIcon::Profile,
        direct_href: Some("/franchisee/profile"),
        children: &[
            MenuChild {
                display_name: "Account Settings",
                href: "/franchisee/profile/settings",
                icon: MenuIcon::Settings,
            },
            MenuChild {
                display_name: "Security",
                href: "/franchisee/profile/security",
                icon: MenuIcon::Lock,
            },
        ],
    },
];

pub fn find_section(id: &str) -> Option<&'static MenuSection> {
    FRANCHISEE_MENU.iter().find(|section| section.id == id)
}

/// Every navigable href in menu order, duplicates included
pub fn all_hrefs() -> Vec<&'static str> {
    FRANCHISEE_MENU
        .iter()
        .flat_map(|section| {
            section
                .direct_href
                .into_iter()
                .chain(section.children.iter().map(|child| child.href))
        })
        .collect()
}

/// Collect configuration defects in a menu definition.
///
/// Nothing here is enforced at render time; callers log the findings.
pub fn audit_menu(sections: &[MenuSection]) -> Vec<ShellError> {
    let mut defects = Vec::new();
    let mut seen_ids = HashSet::new();

    for section in sections {
        if !seen_ids.insert(section.id) {
            defects.push(ShellError::DuplicateSectionId(section.id.to_string()));
        }

        if section.direct_href.is_none() && !section.has_children() {
            defects.push(ShellError::EmptySection(section.id.to_string()));
        }

        if section.direct_href == Some("") {
            defects.push(ShellError::EmptyHref {
                section: section.id.to_string(),
                entry: section.display_name.to_string(),
            });
        }

        let mut seen_hrefs = HashSet::new();
        for child in section.children {
            if child.href.is_empty() {
                defects.push(ShellError::EmptyHref {
                    section: section.id.to_string(),
                    entry: child.display_name.to_string(),
                });
            } else if !seen_hrefs.insert(child.href) {
                defects.push(ShellError::DuplicateChildHref {
                    section: section.id.to_string(),
                    href: child.href.to_string(),
                });
            }
        }
    }

    defects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_menu_has_no_defects() {
        assert!(audit_menu(FRANCHISEE_MENU).is_empty());
    }

    #[test]
    fn test_default_section_exists() {
        let section = find_section(DEFAULT_EXPANDED_SECTION).unwrap();
        assert_eq!(section.display_name, "Dashboard");
        assert!(find_section("nope").is_none());
    }

    #[test]
    fn test_home_href_is_navigable() {
        assert!(all_hrefs().contains(&HOME_HREF));
    }

    #[test]
    fn test_all_hrefs_in_menu_order() {
        let hrefs = all_hrefs();
        assert_eq!(hrefs.first(), Some(&"/franchisee/dashboard"));
        assert_eq!(hrefs.last(), Some(&"/franchisee/profile/security"));
        assert!(hrefs.contains(&"/franchisee/support"));
    }

    #[test]
    fn test_audit_reports_each_defect() {
        const DUP_CHILDREN: &[MenuChild] = &[
            MenuChild { display_name: "A", href: "/x/a", icon: MenuIcon::Plus },
            MenuChild { display_name: "A again", href: "/x/a", icon: MenuIcon::Plus },
            MenuChild { display_name: "Blank", href: "", icon: MenuIcon::Plus },
        ];
        let broken = [
            MenuSection {
                id: "x",
                display_name: "X",
                icon: MenuIcon::Folder,
                direct_href: None,
                children: DUP_CHILDREN,
            },
            MenuSection {
                id: "x",
                display_name: "X twice",
                icon: MenuIcon::Folder,
                direct_href: Some("/x"),
                children: &[],
            },
            MenuSection {
                id: "hollow",
                display_name: "Hollow",
                icon: MenuIcon::Folder,
                direct_href: None,
                children: &[],
            },
        ];

        let defects: Vec<String> = audit_menu(&broken)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            defects,
            vec![
                "Duplicate child href /x/a in section x",
                "Empty href for 'Blank' in section x",
                "Duplicate section id: x",
                "Section hollow has neither a link nor children",
            ]
        );
    }
}
