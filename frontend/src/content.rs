// Marketing copy for the landing page, kept as typed records so the
// section components only decide arrangement.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Check,
    Server,
    Shield,
    Cloud,
    Network,
    Globe,
    Phone,
    Mail,
    MapPin,
    Cpu,
    Zap,
    Leaf,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Check => "✓",
            Icon::Server => "🖥️",
            Icon::Shield => "🛡️",
            Icon::Cloud => "☁️",
            Icon::Network => "🔗",
            Icon::Globe => "🌐",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
            Icon::Cpu => "⚙️",
            Icon::Zap => "⚡",
            Icon::Leaf => "🌿",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyValue {
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecGroup {
    pub icon: Icon,
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    /// Anchor used for deep links (`/#byo-carriers`).
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const COMPANY_NAME: &str = "DataLink Datacenters";

// Hero

pub const HERO_BADGE: &str = "Tier III+ Facilities";
pub const HERO_TITLE: &str = "Enterprise colocation & cloud";
pub const HERO_TITLE_ACCENT: &str = "built for uptime";
pub const HERO_SUBTITLE: &str = "DataLink Datacenters delivers high-density power, carrier-neutral connectivity, and audited security so your workloads stay online and performant.";

pub const HERO_HIGHLIGHTS: [Highlight; 3] = [
    Highlight { icon: Icon::Shield, text: "SOC 2 Type II" },
    Highlight { icon: Icon::Leaf, text: "100% renewable options" },
    Highlight { icon: Icon::Zap, text: "99.999% SLA" },
];

pub const RACK_BUILD: [KeyValue; 6] = [
    KeyValue { key: "Power", value: "5–15kW per rack" },
    KeyValue { key: "Cooling", value: "Hot/cold aisle, CRAH/CRAC" },
    KeyValue { key: "Connectivity", value: "Carrier-neutral, IX access" },
    KeyValue { key: "Security", value: "Biometric + mantrap" },
    KeyValue { key: "Compliance", value: "SOC2, ISO 27001" },
    KeyValue { key: "Support", value: "24x7x365 NOC" },
];

// Solutions

pub const SOLUTIONS_INTRO: &str = "Flexible footprints and on-ramps to meet you where you are, from rack to row to cage.";
pub const SOLUTION_BADGES: [&str; 3] = ["Carrier-neutral", "High-density", "Low-latency"];

pub const SOLUTIONS: [Feature; 3] = [
    Feature {
        icon: Icon::Server,
        title: "Colocation",
        desc: "1/2 and full racks, private cages, cross-connects, and remote hands. Scale from a single rack to dedicated suites.",
    },
    Feature {
        icon: Icon::Cloud,
        title: "Private Cloud",
        desc: "Managed VMware/KVM stacks, bare-metal, GPU-ready nodes, and DRaaS with predictable economics.",
    },
    Feature {
        icon: Icon::Network,
        title: "Network & Interconnects",
        desc: "Blend ISPs, IX peering, L2/L3 paths, and cloud on-ramps to AWS/Azure/GCP. BYO ASN welcome.",
    },
];

// Facility specs

pub const SPECS_INTRO: &str = "Built for reliability, efficiency, and security, validated by third-party audits.";

pub const SPEC_GROUPS: [SpecGroup; 4] = [
    SpecGroup { icon: Icon::Cpu, label: "Power", items: &["2N UPS topology", "+ N+1 generators", "Dual power feeds"] },
    SpecGroup { icon: Icon::Zap, label: "Cooling", items: &["Hot/cold aisle", "In-row & perimeter", "Continuous monitoring"] },
    SpecGroup { icon: Icon::Shield, label: "Security", items: &["24/7 manned", "Biometrics & mantrap", "CCTV with retention"] },
    SpecGroup { icon: Icon::Globe, label: "Connectivity", items: &["Multiple carriers", "Internet Exchanges", "Cloud on-ramps"] },
];

pub const CERTIFICATIONS: [&str; 6] = [
    "SOC 2 Type II",
    "ISO/IEC 27001",
    "PCI-DSS ready",
    "HIPAA-friendly",
    "Tier III design",
    "Green power options",
];

pub const SUPPORTED_DENSITIES: &str = "Standard racks 5–10kW; high-density pods 15–40kW+ with containment and supplemental cooling.";

// Trust

pub const TRUST_INTRO: &str = "Our operations team and on-site NOC keep your workloads online with proactive monitoring and rapid response.";

pub const STATS: [Stat; 4] = [
    Stat { value: "99.999%", label: "SLA Uptime" },
    Stat { value: "24x7x365", label: "Smart Hands" },
    Stat { value: "< 5 ms", label: "Regional latency*" },
    Stat { value: "> 10 Tbps", label: "Network capacity" },
];

pub const LATENCY_FOOTNOTE: &str = "*Latency varies by market and provider.";
pub const SUSTAINABILITY_INTRO: &str = "Efficiency-first design with optimized PUE, free-cooling where available, and renewable energy options.";
pub const SUSTAINABILITY: &[&str] = &[
    "Renewable energy purchasing",
    "High-efficiency cooling",
    "Recycling & e-waste programs",
];

// Quote

pub const QUOTE_INTRO: &str = "Tell us about your footprint and connectivity needs. We'll follow up with pricing and availability.";
pub const QUOTE_PERKS: &[&str] = &[
    "Month-to-month and term discounts",
    "Burstable bandwidth & blended transit",
    "Remote hands packages",
];

// FAQ

pub const FAQ_INTRO: &str = "Quick answers to common questions about our facilities and services.";

pub const FAQ_ENTRIES: [FaqEntry; 3] = [
    FaqEntry {
        id: "byo-carriers",
        question: "Can I bring my own carriers and IP space?",
        answer: "Yes. We're carrier-neutral and welcome BYO ASN, IP space, and cross-connects to on-site carriers and IX.",
    },
    FaqEntry {
        id: "densities",
        question: "What densities can you support?",
        answer: "Standard racks support 5–10kW; high-density pods 15–40kW+ with containment and supplemental cooling.",
    },
    FaqEntry {
        id: "smart-hands",
        question: "Do you offer remote/smart hands?",
        answer: "Yes, 24x7x365. We can rack/stack, swap drives, manage cabling, and perform diagnostics to your runbook.",
    },
];

// Footer

pub const FOOTER_TAGLINE: &str = "Carrier-neutral colocation, private cloud, and interconnect, engineered for uptime.";
pub const FOOTER_LEGAL_LINKS: [&str; 3] = ["Privacy", "Terms", "SLA"];

pub const CONTACT_LINES: [Highlight; 3] = [
    Highlight { icon: Icon::Phone, text: "+1 (800) 555-0145" },
    Highlight { icon: Icon::Mail, text: "sales@datalinkdc.example" },
    Highlight { icon: Icon::MapPin, text: "HQ, Your City, USA" },
];

pub const LOCATIONS: [&str; 4] = ["New York", "Dallas", "Chicago", "Silicon Valley"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;
    use std::collections::HashSet;

    #[test]
    fn faq_ids_are_unique_and_do_not_shadow_sections() {
        let mut seen = HashSet::new();
        for entry in FAQ_ENTRIES.iter() {
            assert!(seen.insert(entry.id), "duplicate faq id {}", entry.id);
            assert!(
                SectionId::ALL.iter().all(|s| s.as_str() != entry.id),
                "faq id {} collides with a section id",
                entry.id
            );
        }
    }

    #[test]
    fn every_spec_group_lists_items() {
        assert!(SPEC_GROUPS.iter().all(|g| !g.items.is_empty()));
    }
}
