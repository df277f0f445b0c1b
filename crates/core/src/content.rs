//! Static marketing copy for the public pages.
//!
//! Everything here is compiled in; only the case-study page reads from the
//! store.

use serde::Serialize;

use crate::catalog;
use crate::mailto::mailto;

pub const SITE_NAME: &str = "DigitalPro";
pub const CONTACT_EMAIL: &str = "hello@digitalpro.com";

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCard {
    pub title: &'static str,
    pub content: &'static str,
    pub sub_content: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub services: Vec<Highlight>,
    pub testimonials: Vec<Testimonial>,
    pub closing: Hero,
}

pub fn home() -> HomePage {
    HomePage {
        hero: Hero {
            title: "Transform Your Business with Digital Expertise",
            subtitle: "We partner with ambitious SMEs worldwide to deliver cutting-edge digital \
                       solutions, strategic marketing, and innovative technology that drives \
                       measurable growth.",
            actions: vec![
                CallToAction { label: "Get Free Consultation", href: "/proposal" },
                CallToAction { label: "View Our Work", href: "/case-studies" },
            ],
        },
        stats: vec![
            Stat { label: "Happy Clients", value: "150+" },
            Stat { label: "Projects Completed", value: "300+" },
            Stat { label: "Years Experience", value: "8+" },
            Stat { label: "Revenue Growth", value: "250%" },
        ],
        services: vec![
            Highlight {
                title: "Web Development",
                description: "Custom websites and web applications built with modern technologies",
                icon: "globe",
                features: &["Responsive Design", "SEO Optimized", "Fast Loading", "Secure"],
            },
            Highlight {
                title: "Digital Marketing",
                description: "Comprehensive digital marketing strategies to grow your business",
                icon: "megaphone",
                features: &["Social Media", "PPC Campaigns", "Content Marketing", "Analytics"],
            },
            Highlight {
                title: "Brand Design",
                description: "Professional branding and visual identity for your business",
                icon: "palette",
                features: &["Logo Design", "Brand Guidelines", "Marketing Materials", "Web Design"],
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "Sarah Johnson",
                company: "TechStart Inc.",
                rating: 5,
                comment: "DigitalPro transformed our online presence completely. Our revenue \
                          increased by 180% within 6 months!",
            },
            Testimonial {
                name: "Mike Chen",
                company: "GrowthCorp",
                rating: 5,
                comment: "Professional, reliable, and results-driven. They delivered exactly \
                          what we needed and more.",
            },
            Testimonial {
                name: "Emma Davis",
                company: "LocalBiz Solutions",
                rating: 5,
                comment: "The best investment we made for our business. Highly recommend their \
                          services!",
            },
        ],
        closing: Hero {
            title: "Ready to Transform Your Business?",
            subtitle: "Join ambitious businesses worldwide that have achieved remarkable growth \
                       with our global expertise.",
            actions: vec![
                CallToAction { label: "Start Your Project", href: "/proposal" },
                CallToAction { label: "Talk to Expert", href: "/contact" },
            ],
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesPage {
    pub offerings: Vec<Offering>,
    pub process: Vec<ProcessStep>,
}

pub fn services() -> ServicesPage {
    ServicesPage {
        offerings: vec![
            Offering {
                title: "Web Development",
                description: "Custom websites and web applications built with cutting-edge technologies",
                features: &["Responsive Design", "Fast Loading", "SEO Optimized", "Secure & Scalable"],
                price: "Starting at $2,999",
            },
            Offering {
                title: "SEO & Digital Marketing",
                description: "Comprehensive digital marketing strategies to increase your online visibility",
                features: &["Keyword Research", "Content Strategy", "Link Building", "Analytics & Reporting"],
                price: "Starting at $899/month",
            },
            Offering {
                title: "Mobile App Development",
                description: "Native and cross-platform mobile applications for iOS and Android",
                features: &["Native Performance", "Cross-Platform", "App Store Optimization", "Push Notifications"],
                price: "Starting at $4,999",
            },
            Offering {
                title: "E-commerce Solutions",
                description: "Complete online stores with payment integration and inventory management",
                features: &["Payment Integration", "Inventory Management", "Order Tracking", "Customer Support"],
                price: "Starting at $3,499",
            },
            Offering {
                title: "Analytics & Optimization",
                description: "Data-driven insights to optimize your digital presence and marketing ROI",
                features: &["Performance Tracking", "Conversion Optimization", "A/B Testing", "Custom Reports"],
                price: "Starting at $599/month",
            },
            Offering {
                title: "Brand & Design",
                description: "Professional branding and visual identity that sets you apart",
                features: &["Logo Design", "Brand Guidelines", "Marketing Materials", "UI/UX Design"],
                price: "Starting at $1,499",
            },
        ],
        process: vec![
            ProcessStep {
                step: "01",
                title: "Discovery & Strategy",
                description: "We analyze your business goals, target audience, and competition to \
                              create a tailored strategy.",
            },
            ProcessStep {
                step: "02",
                title: "Design & Development",
                description: "Our team creates and develops your solution using the latest \
                              technologies and best practices.",
            },
            ProcessStep {
                step: "03",
                title: "Launch & Optimization",
                description: "We launch your project and continuously optimize for better \
                              performance and results.",
            },
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub hero: Hero,
    pub values: Vec<Highlight>,
    pub stats: Vec<Stat>,
}

pub fn about() -> AboutPage {
    AboutPage {
        hero: Hero {
            title: "About DigitalPro",
            subtitle: "A small, senior team helping growing businesses compete online with \
                       strategy, design, and engineering under one roof.",
            actions: vec![CallToAction { label: "Work With Us", href: "/proposal" }],
        },
        values: vec![
            Highlight {
                title: "Results First",
                description: "Every engagement starts from the numbers you need to move",
                icon: "target",
                features: &[],
            },
            Highlight {
                title: "Transparent Pricing",
                description: "Fixed quotes and clear scopes with no hidden costs",
                icon: "receipt",
                features: &[],
            },
            Highlight {
                title: "Long-Term Partners",
                description: "Post-launch support and continuous optimization",
                icon: "handshake",
                features: &[],
            },
        ],
        stats: home().stats,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolsPage {
    pub featured_tool: &'static str,
    pub featured_tool_description: &'static str,
    pub usage_tips: &'static [&'static str],
    pub other_tools: Vec<ToolCard>,
    pub custom_request_link: String,
}

const COMING_SOON: &str = "Coming Soon";

pub fn tools() -> ToolsPage {
    ToolsPage {
        featured_tool: "Google Review Link Generator",
        featured_tool_description: "Generate direct links to make it easy for customers to \
                                    leave Google reviews",
        usage_tips: crate::review_links::USAGE_TIPS,
        other_tools: vec![
            ToolCard {
                title: "Website Speed Test",
                description: "Analyze your website performance and get optimization recommendations",
                icon: "zap",
                status: COMING_SOON,
            },
            ToolCard {
                title: "SEO Audit Tool",
                description: "Comprehensive SEO analysis to improve your search rankings",
                icon: "search",
                status: COMING_SOON,
            },
            ToolCard {
                title: "Social Media Analytics",
                description: "Track and analyze your social media performance across platforms",
                icon: "bar-chart",
                status: COMING_SOON,
            },
            ToolCard {
                title: "Competitor Analysis",
                description: "Analyze your competitors' digital strategies and find opportunities",
                icon: "target",
                status: COMING_SOON,
            },
            ToolCard {
                title: "Email Marketing ROI Calculator",
                description: "Calculate the potential return on investment for email campaigns",
                icon: "mail",
                status: COMING_SOON,
            },
            ToolCard {
                title: "Business Name Generator",
                description: "Generate creative and available business names for your startup",
                icon: "lightbulb",
                status: COMING_SOON,
            },
        ],
        custom_request_link: mailto(CONTACT_EMAIL, "Custom Tool Request"),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub cards: Vec<ContactCard>,
}

pub fn contact() -> ContactPage {
    ContactPage {
        cards: vec![
            ContactCard {
                title: "Email Us",
                content: CONTACT_EMAIL,
                sub_content: "We respond within 24 hours",
            },
            ContactCard {
                title: "Call Us",
                content: "+1 (555) 123-4567",
                sub_content: "Mon-Fri 9AM-6PM EST",
            },
            ContactCard {
                title: "Visit Us",
                content: "123 Business Ave",
                sub_content: "Tech City, TC 12345",
            },
            ContactCard {
                title: "Business Hours",
                content: "Mon-Fri 9AM-6PM",
                sub_content: "Weekend by appointment",
            },
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalPage {
    pub services: &'static [&'static str],
    pub budget_ranges: &'static [&'static str],
    pub timelines: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub fn proposal() -> ProposalPage {
    ProposalPage {
        services: catalog::SERVICES,
        budget_ranges: catalog::BUDGET_RANGES,
        timelines: catalog::TIMELINES,
        benefits: &[
            "Free consultation and project analysis",
            "Custom solution tailored to your needs",
            "Transparent pricing with no hidden costs",
            "Dedicated project manager",
            "Regular progress updates",
            "Post-launch support and maintenance",
        ],
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Services", "/services"),
    ("Case Studies", "/case-studies"),
    ("Tools", "/tools"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub site_name: &'static str,
    pub navigation: Vec<NavItem>,
    pub primary_action: CallToAction,
    pub admin_link: CallToAction,
}

/// Header chrome with the entry matching `current_path` marked active.
pub fn layout(current_path: &str) -> Layout {
    Layout {
        site_name: SITE_NAME,
        navigation: NAVIGATION
            .iter()
            .map(|&(name, href)| NavItem {
                name,
                href,
                active: href == current_path,
            })
            .collect(),
        primary_action: CallToAction { label: "Get Proposal", href: "/proposal" },
        admin_link: CallToAction { label: "Admin", href: crate::guard::LOGIN_PATH },
    }
}
