mod english;
mod korean;
mod portfolio;

pub use english::EnglishContent;
pub use korean::KoreanContent;
pub use portfolio::{PageContent, Portfolio, PortfolioPage};
