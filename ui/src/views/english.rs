use dioxus::prelude::*;

use crate::components::{ContactItem, SectionCard, TimelineEntry};
use crate::core::language::Language;
use crate::core::sections::{ABOUT, EDUCATION, EXPERIENCE, PROJECTS, STACK};

const LANG: Language = Language::English;

/// English résumé, authored separately from the Korean tree.
#[component]
pub fn EnglishContent() -> Element {
    rsx! {
        header { class: "profile",
            div { class: "profile__text",
                h1 { class: "profile__name", "Freelance Developer Eunjin Lee" }
                div { class: "profile__contacts",
                    ContactItem {
                        label: "Email",
                        value: "smallsteadycodes@gmail.com",
                        href: "mailto:smallsteadycodes@gmail.com",
                    }
                    ContactItem {
                        label: "Blog",
                        value: "dog-foot-story.tistory.com",
                        href: "https://dog-foot-story.tistory.com",
                    }
                }
            }
            div { class: "profile__photo-frame",
                img {
                    class: "profile__photo",
                    src: "/profile.jpg",
                    alt: "Eunjin Lee profile",
                    width: "104",
                    height: "104",
                }
            }
        }

        SectionCard { section: &ABOUT, language: LANG,
            div { class: "summary",
                p { "Hello, I’m Eunjin Lee, a freelance developer." }
                p { "With over 5 years of experience in Java & Python–based ERP and public-sector systems," }
                p { "I focus on implementing complex business logic quickly and reliably to meet customer needs." }
                br {}
                p { "In practice, I reduced ERP order and shipment processing time by over 80% through transaction partitioning and SQL tuning," }
                p { "and significantly improved operational efficiency by migrating a public-sector budgeting system to the web and building automation processes." }
                br {}
                p {
                    "Leveraging broad domain experience, I design and ship "
                    b { "what on‑site users truly need" }
                    "."
                }
                p { "During projects, I prioritize clear communication and accountable schedule management to be a developer trusted by every partner I work with." }
            }
        }

        SectionCard { section: &STACK, language: LANG,
            div { class: "stack",
                div {
                    h3 { class: "stack__group", "Backend & Frameworks" }
                    p { "Java, Python, Spring Boot, Spring Batch, Django" }
                }
                div {
                    h3 { class: "stack__group", "Database & Infra" }
                    p { "Oracle, MySQL, MariaDB, AWS, Docker, Linux, Jenkins, NGINX" }
                }
                div {
                    h3 { class: "stack__group", "Auth & Tools" }
                    p { "JWT, OAuth2, Git, IntelliJ IDEA, PyCharm, WebSquare, Postman, Kibana" }
                }
            }
        }

        SectionCard { section: &EXPERIENCE, language: LANG,
            div { class: "entries entries--tight",
                TimelineEntry {
                    title: "Douzone Bizon | SCM Development Unit | Full Stack developer",
                    period: "Nov 2021 – Jul 2025 (3 yrs 9 mos)",
                    subtitle: "Enterprise solution provider · Full stack development & operations",
                }
                TimelineEntry {
                    title: "CODAA | Corporate R&D Center | Full Stack developer",
                    period: "Mar 2021 – Oct 2021 (8 mos)",
                    subtitle: "Green‑building consulting company · Solution design & full‑stack development",
                }
                TimelineEntry {
                    title: "ITEyes | Public Finance Division | Fronend developer",
                    period: "Dec 2019 – Jan 2021 (1 yr 2 mos)",
                    subtitle: "Financial solutions company · Front‑end development",
                }
            }
        }

        SectionCard { section: &PROJECTS, language: LANG,
            div { class: "entries entries--loose",
                TimelineEntry {
                    title: "Douzone Bizon ERP SCM System",
                    period: "Nov 2021 – Jul 2025",
                    subtitle: "Java · Spring Boot · Oracle · MariaDB · GitLab · JavaScript · Confluence · Jenkins · Kibana",
                    ul { class: "entry__points",
                        li {
                            "Customer‑specific logistics process customization: complex business logic including "
                            b { "OMS/WMS/MES integrations" }
                        }
                        li { "Unified multiple order channels: I/F messaging, batch jobs, groupware, Excel upload" }
                        li { "High‑volume order/inventory/ledger processing: applied transaction partitioning, indexing, SQL tuning, and paging (key query 30 min → 2 min 30 sec)" }
                        li { "Service stabilization: improved exception handling, standardized error messages, log monitoring (monthly incidents 4.75 → 1.6)" }
                        li { "AI‑based automatic order recommendations · visualization · alerts, multi‑language, personal data encryption/decryption" }
                    }
                }
                TimelineEntry {
                    title: "B2B E‑commerce Platform (MRO Market)",
                    period: "Nov 2022 – Jan 2023",
                    subtitle: "JWT · Spring Batch",
                    ul { class: "entry__points",
                        li { "Built new integrations for product sync and order/shipping/payment data between ERP and the platform" }
                        li { "Resolved JWT authentication and HTTP communication issues to secure integration stability" }
                    }
                }
                TimelineEntry {
                    title: "Startup Growth R&D (Green Building Platform)",
                    period: "Mar 2021 – Oct 2021",
                    subtitle: "Python · Django · MySQL · NGINX · AWS · Linux · OAuth2",
                    ul { class: "entry__points",
                        li { "Building Act viewer: production service based on the National Law Information Open API" }
                        li { "Energy assessment module: cloud infrastructure and social login implemented" }
                    }
                }
                TimelineEntry {
                    title: "Ministry of Economy & Finance — Next‑Gen Digital Budget & Accounting (dBrain+)",
                    period: "Jan 2020 – Jan 2021",
                    subtitle: "Java · eGovFramework · Oracle · WebSquare",
                    ul { class: "entry__points",
                        li { "Developed the budgeting module for a system handling ~KRW 500T annual expenditures" }
                        li { "Produced TO‑BE designs based on AS‑IS analysis and implemented features" }
                        li { "Built automated reporting for annual/mid‑term/supplementary budgets with Clip Report" }
                        li { "Digitized budget request & review workflows, first adoption of Web‑HWP editor integration" }
                    }
                }
            }
        }

        SectionCard { section: &EDUCATION, language: LANG,
            div { class: "education",
                div {
                    h3 { class: "education__title", "Dongduk Women’s University · Information & Statistics" }
                    p { class: "education__detail", "2013 – 2020 (Graduated)" }
                }
                div {
                    h3 { class: "education__title", "Certificates" }
                    ul { class: "education__certs",
                        li { "Engineer Information Processing — HRDKorea (2019.08)" }
                        li { "ADsP, Advanced Data Analytics Semi‑Professional — Kdata (2019.07)" }
                    }
                }
            }
        }
    }
}
