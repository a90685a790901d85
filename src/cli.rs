use std::path::PathBuf;

use clap::Parser;

/// Convert an UShER mutation-annotated tree into the Taxonium JSONL format.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input mutation-annotated tree (.pb, .pb.gz)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (.jsonl, .jsonl.gz)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Sample metadata file (.tsv, .csv, optionally .gz)
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// Metadata columns to carry into the output
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Metadata column holding the sample name
    #[arg(long, default_value = "strain")]
    pub key_column: String,

    /// GenBank file with the reference genome and gene annotations;
    /// enables amino-acid mutation calling
    #[arg(short, long)]
    pub genbank: Option<PathBuf>,

    /// Run chronumental to infer a time tree (requires --metadata with dates)
    #[arg(long)]
    pub chronumental: bool,

    /// Optimization steps for chronumental
    #[arg(long, default_value_t = 100)]
    pub chronumental_steps: u32,

    /// Also keep chronumental's per-sample date estimates at this path
    #[arg(long)]
    pub chronumental_date_output: Option<PathBuf>,

    /// Prune branches that are tiny next to their biggest sibling
    #[arg(long)]
    pub shear: bool,

    /// Sibling-to-branch tip ratio above which a branch is sheared
    #[arg(long, default_value_t = 1000.0)]
    pub shear_threshold: f64,

    /// Restrict the root's reference records to positions that vary in the
    /// tree, shrinking the output
    #[arg(long)]
    pub only_variable_sites: bool,

    /// Clade annotation fields to extract from the tree, in file order
    /// (e.g. "nextstrain,pango")
    #[arg(long, value_delimiter = ',')]
    pub clade_types: Vec<String>,

    /// Taxonium display config as inline JSON
    #[arg(long)]
    pub config_json: Option<String>,

    /// Title to embed in the output's config
    #[arg(long)]
    pub title: Option<String>,

    /// Treat recoverable input oddities as fatal
    #[arg(long)]
    pub validate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses_with_defaults() {
        let args = Args::parse_from([
            "usher_to_taxonium",
            "--input",
            "tree.pb.gz",
            "--output",
            "out.jsonl.gz",
        ]);
        assert_eq!(args.key_column, "strain");
        assert_eq!(args.chronumental_steps, 100);
        assert_eq!(args.shear_threshold, 1000.0);
        assert!(args.columns.is_empty());
        assert!(!args.shear);
        assert!(!args.validate);
    }

    #[test]
    fn comma_lists_split() {
        let args = Args::parse_from([
            "usher_to_taxonium",
            "-i",
            "tree.pb",
            "-o",
            "out.jsonl",
            "-c",
            "date,country",
            "--clade-types",
            "nextstrain,pango",
        ]);
        assert_eq!(args.columns, vec!["date", "country"]);
        assert_eq!(args.clade_types, vec!["nextstrain", "pango"]);
    }
}
