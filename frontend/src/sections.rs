/// Stable in-page anchors. The nav bar can only point at one of these, so
/// every link has a section to land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Solutions,
    Specs,
    Trust,
    Quote,
    Faq,
    Contact,
}

impl SectionId {
    #[cfg(test)]
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Solutions,
        SectionId::Specs,
        SectionId::Trust,
        SectionId::Quote,
        SectionId::Faq,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Solutions => "solutions",
            SectionId::Specs => "specs",
            SectionId::Trust => "trust",
            SectionId::Quote => "quote",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Solutions", target: SectionId::Solutions },
    NavLink { label: "Facilities", target: SectionId::Specs },
    NavLink { label: "Trust", target: SectionId::Trust },
    NavLink { label: "FAQ", target: SectionId::Faq },
    NavLink { label: "Contact", target: SectionId::Contact },
];

pub const TALK_TO_SALES: NavLink = NavLink { label: "Talk to Sales", target: SectionId::Contact };
pub const GET_A_QUOTE: NavLink = NavLink { label: "Get a Quote", target: SectionId::Quote };

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }

    #[test]
    fn href_prefixes_hash() {
        assert_eq!(SectionId::Specs.href(), "#specs");
        assert_eq!(GET_A_QUOTE.target.href(), "#quote");
    }
}
