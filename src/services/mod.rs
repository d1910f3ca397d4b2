pub mod category_lookup;
pub mod pagination;
pub mod quiz;
pub mod trivia_service;

pub use category_lookup::{all_categories, format_categories, CategoryMap};
pub use pagination::{paginate, parse_page, QUESTIONS_PER_PAGE};
pub use quiz::QuizEngine;
pub use trivia_service::{CategoryQuestions, QuestionListing, SearchOutcome, TriviaService};
