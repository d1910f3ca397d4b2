pub mod random;
pub mod store;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use store::{MemoryStore, QuestionFilter, TriviaStore};
