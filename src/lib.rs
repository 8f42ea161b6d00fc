pub mod config;
pub mod generator;
pub mod numbers;
pub mod usernames;
pub mod variants;
pub mod wordlist;

pub use config::{GeneratorConfig, OutputPaths};
pub use generator::{generate_passwords, LengthWindow, SuffixPools};
pub use usernames::generate_usernames;
pub use variants::{
    case_variants, initial_last_variants, pairwise_combination, title_variants, VariantPool,
};
pub use wordlist::{write_passwords, write_usernames, PoolKind, Profile, Wordlists};
