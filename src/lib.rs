pub mod annotate;
pub mod chronumental;
pub mod cli;
pub mod commands;
pub mod decode;
pub mod expand;
pub mod genbank;
pub mod generated;
pub mod genes;
pub mod jsonl;
pub mod layout;
pub mod metadata;
pub mod mutation;
pub mod newick;
pub mod order;
pub mod shear;
pub mod tree;

mod utils;
