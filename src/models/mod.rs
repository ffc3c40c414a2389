pub mod loaders;
pub mod question;

pub use loaders::{load_bank, load_json_bank, load_toml_bank};
pub use question::{QuestionBank, QuestionRecord};
