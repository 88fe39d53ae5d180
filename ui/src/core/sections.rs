//! The fixed, ordered list of page sections.

use super::language::Language;

/// One addressable region of the page and its label in each language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Anchor id, unique across the page.
    pub id: &'static str,
    pub label_ko: &'static str,
    pub label_en: &'static str,
}

impl SectionDescriptor {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Korean => self.label_ko,
            Language::English => self.label_en,
        }
    }

    /// In-page link target, e.g. `#about`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const ABOUT: SectionDescriptor = SectionDescriptor {
    id: "about",
    label_ko: "경력 요약",
    label_en: "Summary",
};

pub const STACK: SectionDescriptor = SectionDescriptor {
    id: "stack",
    label_ko: "기술 스택",
    label_en: "Tech Stack",
};

pub const EXPERIENCE: SectionDescriptor = SectionDescriptor {
    id: "exp",
    label_ko: "경력",
    label_en: "Experience",
};

pub const PROJECTS: SectionDescriptor = SectionDescriptor {
    id: "projects",
    label_ko: "프로젝트",
    label_en: "Projects",
};

pub const EDUCATION: SectionDescriptor = SectionDescriptor {
    id: "edu",
    label_ko: "학력 및 자격",
    label_en: "Education & Certifications",
};

/// Page order. Drives both the navigation bar and the tracker's candidates.
pub static SECTIONS: [SectionDescriptor; 5] = [ABOUT, STACK, EXPERIENCE, PROJECTS, EDUCATION];

/// The section considered active before anything has been scrolled past.
pub fn default_section() -> &'static SectionDescriptor {
    &SECTIONS[0]
}
