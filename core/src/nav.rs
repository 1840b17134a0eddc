#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const HERO_SECTION: &str = "hero";
pub const CONTACT_SECTION: &str = "contact";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "education", label: "Education" },
    NavItem { id: "certifications", label: "Certifications" },
    NavItem { id: CONTACT_SECTION, label: "Contact" },
];

pub fn nav_item_by_label(label: &str) -> Option<&'static NavItem> {
    let trimmed = label.trim();
    NAV_ITEMS
        .iter()
        .find(|item| item.label.eq_ignore_ascii_case(trimmed))
}

pub fn section_ids() -> impl Iterator<Item = &'static str> {
    std::iter::once(HERO_SECTION).chain(NAV_ITEMS.iter().map(|item| item.id))
}

pub fn section_from_hash(hash: &str) -> Option<&'static str> {
    let id = hash.trim().trim_start_matches('#');
    section_ids().find(|known| *known == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_are_unique() {
        let ids: Vec<_> = section_ids().collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.first(), Some(&HERO_SECTION));
    }

    #[test]
    fn label_lookup_ignores_case() {
        let item = nav_item_by_label(" certifications ").unwrap();
        assert_eq!(item.id, "certifications");
        assert!(nav_item_by_label("Blog").is_none());
    }

    #[test]
    fn hash_resolves_known_sections_only() {
        assert_eq!(section_from_hash("#contact"), Some(CONTACT_SECTION));
        assert_eq!(section_from_hash("hero"), Some(HERO_SECTION));
        assert_eq!(section_from_hash("#missing"), None);
        assert_eq!(section_from_hash(""), None);
    }
}
