pub mod deepl;
