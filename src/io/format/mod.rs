pub mod json;
pub mod jsonl;
pub mod yaml;
