//! Literal page content: feature cards, member organizations, links and
//! document metadata.
//!
//! Everything here is `const` data. Order in each array is display order.

/// In-page anchor of the "about" section.
pub const ABOUT_ANCHOR: &str = "#about-us";
/// Source hosting organization.
pub const GITHUB_URL: &str = "https://github.com/las-wg";
/// Community chat invite.
pub const DISCORD_URL: &str = "https://discord.gg/wmRSNHsRAh";

pub const LOGO_PATH: &str = "/logo.svg";
pub const LOGO_ALT: &str = "LAS-WG Logo";
pub const BACKGROUND_PATH: &str = "/background.svg";

/// Directory the member logos are served from.
pub const ORG_LOGO_DIR: &str = "/orgs/";

/// Document `<head>` metadata, used for link previews.
pub mod meta {
    pub const TITLE: &str = "LAS-WG | Lightweight Agent Standard Working Group";
    pub const DESCRIPTION: &str = "A lean working group that develops standards for AI agents.";
    pub const OG_TITLE: &str = "Lightweight Agent Standard Working Group";
    pub const OG_TYPE: &str = "website";
    pub const OG_URL: &str = "https://las-wg.org";
    pub const OG_IMAGE: &str = "";
    pub const ICON_HREF: &str = super::LOGO_PATH;
    pub const ICON_TYPE: &str = "image/x-icon";
}

/// Icon shown at the top of a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Zap,
    Award,
    BookOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::Zap,
        title: "Build Small",
        description: "We focus on specific parts of agent communication.",
    },
    Feature {
        icon: FeatureIcon::Award,
        title: "Application-Driven",
        description: "We work with major agent companies to focus on issues that matter.",
    },
    Feature {
        icon: FeatureIcon::BookOpen,
        title: "Quick & Iterative",
        description: "We prefer testing something rather than debating if it will work.",
    },
];

/// An organization some of our members come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberOrg {
    pub name: &'static str,
    /// File name under [`ORG_LOGO_DIR`].
    pub logo: &'static str,
}

impl MemberOrg {
    pub fn logo_path(&self) -> String {
        format!("{ORG_LOGO_DIR}{}", self.logo)
    }
}

const fn org(name: &'static str, logo: &'static str) -> MemberOrg {
    MemberOrg { name, logo }
}

pub const MEMBERS: [MemberOrg; 12] = [
    org("LangChain", "langchain.png"),
    org("Camel AI", "camelai.png"),
    org("University of Oxford", "oxford.png"),
    org("Stanford University", "stanford.png"),
    org("MIT", "mit.png"),
    org("Cosmos Institute", "cosmos.png"),
    org("Wildcard", "wildcard.png"),
    org("Agent Network Protocol", "anp.png"),
    org("Eclipse LMOS", "eclipse-lmos.png"),
    org("AgentOps", "agentops.png"),
    org("Firecrawl", "firecrawl.png"),
    org("WebAir", "webair.png"),
];

/// Icon placed before a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Github,
    Discord,
}

/// A link shown in the header, the mobile menu and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Option<NavIcon>,
    /// Opens in a new browsing context.
    pub external: bool,
}

impl NavLink {
    /// `target` attribute value, if any.
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    /// `rel` attribute value, if any.
    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        href: ABOUT_ANCHOR,
        icon: None,
        external: false,
    },
    NavLink {
        label: "GitHub",
        href: GITHUB_URL,
        icon: Some(NavIcon::Github),
        external: true,
    },
    NavLink {
        label: "Discord",
        href: DISCORD_URL,
        icon: Some(NavIcon::Discord),
        external: true,
    },
];
