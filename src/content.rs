use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Projects,
    Experience,
    Achievements,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub order: u32,
    pub kind: SectionKind,
    pub in_nav: bool,
}

/// Color accents available to rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Purple,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Blue => "text-blue-300",
            Tone::Green => "text-green-300",
            Tone::Yellow => "text-yellow-300",
            Tone::Purple => "text-purple-400",
        }
    }
}

/// A run of text with optional emphasis. Rendered as text nodes, never as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Text(&'static str),
    Strong(&'static str),
    Accent(Tone, &'static str),
}

pub type RichText = &'static [Span];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetail {
    pub intro: RichText,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: RichText,
    pub detail: ProjectDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificationEntry {
    pub icon: &'static str,
    pub text: RichText,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
    pub call_to_action_target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub paragraphs: &'static [RichText],
    pub closing: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate section id: {0}")]
    DuplicateSection(&'static str),
    #[error("section {0} is out of order")]
    SectionOrder(&'static str),
    #[error("duplicate project id: {0}")]
    DuplicateProject(&'static str),
    #[error("link target does not name a section: {0}")]
    UnknownTarget(&'static str),
    #[error("malformed link: {0}")]
    MalformedLink(&'static str),
}

pub const SITE_TITLE: &str = "My Portfolio";
pub const OWNER: &str = "Ramasubramaniam Gv";
const PROFILE_IMAGE: &str = "/profile.svg";

static SECTIONS: [SectionDescriptor; 6] = [
    SectionDescriptor {
        id: "hero",
        label: "Home",
        order: 0,
        kind: SectionKind::Hero,
        in_nav: false,
    },
    SectionDescriptor {
        id: "about",
        label: "About Me",
        order: 1,
        kind: SectionKind::About,
        in_nav: true,
    },
    SectionDescriptor {
        id: "projects",
        label: "Projects",
        order: 2,
        kind: SectionKind::Projects,
        in_nav: true,
    },
    SectionDescriptor {
        id: "experience",
        label: "Experience",
        order: 3,
        kind: SectionKind::Experience,
        in_nav: true,
    },
    SectionDescriptor {
        id: "achievements",
        label: "Achievements",
        order: 4,
        kind: SectionKind::Achievements,
        in_nav: true,
    },
    SectionDescriptor {
        id: "contact",
        label: "Contact",
        order: 5,
        kind: SectionKind::Contact,
        in_nav: true,
    },
];

static HERO: Hero = Hero {
    headline: "Hello, I'm a Cybersecurity Engineer",
    tagline: "Passionate about security and ethical hacking",
    call_to_action: "Contact Me",
    call_to_action_target: "contact",
};

static ABOUT: About = About {
    paragraphs: &[
        &[
            Span::Text("👋 Hey there! I'm "),
            Span::Accent(Tone::Blue, OWNER),
            Span::Text(", a passionate Cybersecurity Professional with a strong background in penetration testing, vulnerability assessment, and network security."),
        ],
        &[Span::Text(
            "With a Master's degree in Cybersecurity, I thrive on securing digital landscapes and uncovering potential security risks before they become real threats. I specialize in web application security, enterprise security, and network security.",
        )],
        &[
            Span::Text("I've worked with tools like "),
            Span::Accent(
                Tone::Green,
                "Nmap, Burp Suite, DirB, FeroxBuster, John the Ripper, and Hashcat",
            ),
            Span::Text(", and I love tackling CTF challenges to sharpen my skills."),
        ],
        &[
            Span::Text("Beyond security, I'm an advocate for continuous learning and knowledge sharing. I'm currently working on a "),
            Span::Accent(Tone::Yellow, "cybersecurity blog"),
            Span::Text(" to help beginners and professionals stay ahead in the field. 🚀"),
        ],
        &[Span::Text(
            "My goal? To contribute to organizations by enhancing their security posture while continuously evolving as a cybersecurity expert.",
        )],
    ],
    closing: "Let's connect and make the digital world a safer place! 🔐",
};

static PROJECTS: [ProjectEntry; 2] = [
    ProjectEntry {
        id: "anomaly-ids-cnn",
        title: "Anomaly Intrusion Detection using CNN",
        summary: &[
            Span::Text("This project develops an Anomaly-Based Intrusion Detection System (IDS) using CNNs to detect cyber threats in IoT networks. The model is trained on the "),
            Span::Strong("Bot-IoT 2023 dataset"),
            Span::Text(", which contains real-world IoT-based attack scenarios."),
        ],
        detail: ProjectDetail {
            intro: &[Span::Text(
                "By leveraging deep learning, this system enhances cybersecurity defenses by identifying suspicious activities and distinguishing between normal and malicious network behavior.",
            )],
            bullets: &[
                "Detects abnormal patterns in network traffic.",
                "Reduces false positives compared to traditional IDS methods.",
                "Uses CNN architectures to extract complex patterns for high accuracy.",
            ],
        },
    },
    ProjectEntry {
        id: "av-sha256",
        title: "Enhancing Security of Autonomous Vehicles using SHA-256",
        summary: &[Span::Text(
            "This project focuses on securing autonomous vehicles by integrating SHA-256 cryptographic hashing to ensure data integrity and prevent unauthorized access to vehicle control systems.",
        )],
        detail: ProjectDetail {
            intro: &[Span::Text(
                "The system enhances vehicle security by preventing unauthorized modifications to firmware and network communications. The project involves:",
            )],
            bullets: &[
                "Applying SHA-256 hashing to secure communication between vehicle components.",
                "Ensuring data integrity to prevent cyber threats such as replay attacks.",
                "Enhancing authentication mechanisms for self-driving car networks.",
            ],
        },
    },
];

static EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        company: "TTK Prestige",
        period: "May 2022 - July 2022",
        bullets: &[
            "Initially was taught about how a company drafts its policies and later was told to draft a policy for a company.",
            "Learned about the basics of security like CIA, how an attack takes place.",
            "Collaborated with officials to perform penetration testing on the company's websites.",
            "Used tools like Wireshark, Metasploit, and Burp Suite.",
        ],
    },
    ExperienceEntry {
        company: "Titan Company",
        period: "August 2022 - September 2022",
        bullets: &[
            "Developed a dynamic and responsive web application with the help of colleagues using Vue.js for the frontend and Express.js for the backend. The website provides a seamless user experience with efficient client-server communication.",
            "Served the organization's website over both HTTP and HTTPS.",
        ],
    },
];

const HKCS_CERTIFICATES: &str =
    "https://drive.google.com/drive/folders/1hw6i70-Ex6nVCAfzhUihlsyg0FmWIdrD?usp=sharing";

static CERTIFICATIONS: [CertificationEntry; 7] = [
    CertificationEntry {
        icon: "📜",
        text: &[
            Span::Strong("Google Cybersecurity Certification"),
            Span::Text(" – Coursera"),
        ],
        link: Some("https://coursera.org/share/92c18f5931db7bb50b52e1ca952c8b77"),
    },
    CertificationEntry {
        icon: "📜",
        text: &[
            Span::Strong("Cyber Security Workshop"),
            Span::Text(" – HKCS Foundations"),
        ],
        link: Some(HKCS_CERTIFICATES),
    },
    CertificationEntry {
        icon: "📜",
        text: &[
            Span::Strong("Ethical Hacking"),
            Span::Text(" – INFOQUEST 2020, GCT CSEA"),
        ],
        link: None,
    },
    CertificationEntry {
        icon: "📜",
        text: &[
            Span::Strong("10-day Bug Bounty Program"),
            Span::Text(" – Prompt InfoTech"),
        ],
        link: Some(HKCS_CERTIFICATES),
    },
    CertificationEntry {
        icon: "🏆",
        text: &[
            Span::Strong("Hands-on Capture the Flag (CTF) Challenges:"),
            Span::Text(" Titanic, Underpass, and Linkvortex"),
        ],
        link: Some("https://www.linkedin.com/posts/ramasubramaniam-gv-563931213_hackthebox-cybersecurity-ethicalhacking-activity-7280955734811447297-hFRN"),
    },
    CertificationEntry {
        icon: "🔍",
        text: &[
            Span::Strong("Discovered a Bug in"),
            Span::Text(" Queen Mary University of London"),
        ],
        link: None,
    },
    CertificationEntry {
        icon: "🔍",
        text: &[
            Span::Strong("Discovered a Bug in"),
            Span::Text(" The International Journal of Indian Psychology"),
        ],
        link: None,
    },
];

static CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/ramasubramaniam-gv-563931213/",
        external: true,
    },
    ContactLink {
        label: OWNER,
        href: "mailto:gvpranav747@gmail.com",
        external: false,
    },
];

pub fn sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

pub fn nav_sections() -> impl Iterator<Item = &'static SectionDescriptor> {
    SECTIONS.iter().filter(|s| s.in_nav)
}

pub fn section(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|s| s.id == id)
}

pub fn hero() -> &'static Hero {
    &HERO
}

pub fn about() -> &'static About {
    &ABOUT
}

pub fn projects() -> &'static [ProjectEntry] {
    &PROJECTS
}

pub fn experience() -> &'static [ExperienceEntry] {
    &EXPERIENCE
}

pub fn certifications() -> &'static [CertificationEntry] {
    &CERTIFICATIONS
}

pub fn contact_links() -> &'static [ContactLink] {
    &CONTACT_LINKS
}

pub fn profile_image() -> &'static str {
    PROFILE_IMAGE
}

/// Checks the shipped content for authoring defects.
pub fn validate() -> Result<(), ContentError> {
    check_sections(&SECTIONS)?;
    check_projects(&PROJECTS)?;
    check_target(&SECTIONS, HERO.call_to_action_target)?;

    let cert_links = CERTIFICATIONS.iter().filter_map(|c| c.link);
    let contact_links = CONTACT_LINKS.iter().map(|c| c.href);
    for link in cert_links.chain(contact_links) {
        check_link(link)?;
    }
    Ok(())
}

fn check_sections(sections: &[SectionDescriptor]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    let mut prev: Option<u32> = None;
    for s in sections {
        if !seen.insert(s.id) {
            return Err(ContentError::DuplicateSection(s.id));
        }
        if prev.is_some_and(|p| s.order <= p) {
            return Err(ContentError::SectionOrder(s.id));
        }
        prev = Some(s.order);
    }
    Ok(())
}

fn check_projects(projects: &[ProjectEntry]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    match projects.iter().find(|p| !seen.insert(p.id)) {
        Some(p) => Err(ContentError::DuplicateProject(p.id)),
        None => Ok(()),
    }
}

fn check_target(sections: &[SectionDescriptor], target: &'static str) -> Result<(), ContentError> {
    if sections.iter().any(|s| s.id == target) {
        Ok(())
    } else {
        Err(ContentError::UnknownTarget(target))
    }
}

fn check_link(link: &'static str) -> Result<(), ContentError> {
    let well_formed = if let Some(rest) = link.strip_prefix("https://") {
        rest.split('/').next().is_some_and(|host| host.contains('.'))
    } else if let Some(addr) = link.strip_prefix("mailto:") {
        matches!(addr.split_once('@'), Some((user, domain)) if !user.is_empty() && domain.contains('.'))
    } else {
        false
    };
    if well_formed {
        Ok(())
    } else {
        Err(ContentError::MalformedLink(link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &'static str, order: u32) -> SectionDescriptor {
        SectionDescriptor {
            id,
            label: id,
            order,
            kind: SectionKind::About,
            in_nav: true,
        }
    }

    #[test]
    fn test_shipped_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_sections_in_render_order() {
        let ids: Vec<&str> = sections().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["hero", "about", "projects", "experience", "achievements", "contact"]
        );

        let orders: Vec<u32> = sections().iter().map(|s| s.order).collect();
        assert!(orders.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nav_sections_skip_hero() {
        let ids: Vec<&str> = nav_sections().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["about", "projects", "experience", "achievements", "contact"]
        );
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section("contact").map(|s| s.kind), Some(SectionKind::Contact));
        assert!(section("blog").is_none());
    }

    #[test]
    fn test_every_kind_has_one_section() {
        let kinds: HashSet<SectionKind> = sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds.len(), sections().len());
    }

    #[test]
    fn test_check_sections_rejects_duplicates_and_order() {
        let dup = [descriptor("a", 0), descriptor("a", 1)];
        assert_eq!(check_sections(&dup), Err(ContentError::DuplicateSection("a")));

        let unordered = [descriptor("a", 2), descriptor("b", 2)];
        assert_eq!(check_sections(&unordered), Err(ContentError::SectionOrder("b")));

        let ok = [descriptor("a", 0), descriptor("b", 5)];
        assert!(check_sections(&ok).is_ok());
    }

    #[test]
    fn test_check_projects_rejects_duplicates() {
        let mut projects = PROJECTS;
        projects[1].id = projects[0].id;
        assert_eq!(
            check_projects(&projects),
            Err(ContentError::DuplicateProject("anomaly-ids-cnn"))
        );
    }

    #[test]
    fn test_check_target() {
        assert!(check_target(&SECTIONS, "contact").is_ok());
        assert_eq!(
            check_target(&SECTIONS, "blog"),
            Err(ContentError::UnknownTarget("blog"))
        );
    }

    #[test]
    fn test_check_link() {
        assert!(check_link("https://coursera.org/share/abc").is_ok());
        assert!(check_link("mailto:someone@example.com").is_ok());

        // missing @ between user and domain
        assert!(check_link("mailto:gvpranav747gmail.com").is_err());
        assert!(check_link("http://insecure.example.com").is_err());
        assert!(check_link("https://localhost").is_err());
        assert!(check_link("").is_err());
    }

    #[test]
    fn test_projects_have_three_bullets() {
        let cnn = projects()
            .iter()
            .find(|p| p.title == "Anomaly Intrusion Detection using CNN")
            .expect("CNN project should exist");
        assert_eq!(cnn.detail.bullets.len(), 3);
        assert!(projects().iter().all(|p| !p.detail.bullets.is_empty()));
    }
}
