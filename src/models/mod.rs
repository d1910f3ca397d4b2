pub mod category;
pub mod loaders;
pub mod question;
pub mod quiz;

pub use category::Category;
pub use loaders::{load_seed_file, SeedData, SeedQuestion};
pub use question::{CreateQuestionRequest, NewQuestion, Question};
pub use quiz::{QuizCategory, QuizRequest, ALL_CATEGORIES};
