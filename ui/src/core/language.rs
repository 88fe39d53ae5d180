//! The two page languages.

/// Which of the two independently authored content trees is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// The other language. Toggling twice is the identity.
    pub fn toggle(self) -> Self {
        match self {
            Self::Korean => Self::English,
            Self::English => Self::Korean,
        }
    }

    /// Fluent locale carrying the navigation strings.
    pub fn locale(self) -> &'static str {
        match self {
            Self::Korean => "ko-KR",
            Self::English => "en-US",
        }
    }

    /// Value for the document's `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// Short label shown on buttons, e.g. `KO`.
    pub fn short_code(self) -> &'static str {
        match self {
            Self::Korean => "KO",
            Self::English => "EN",
        }
    }
}
