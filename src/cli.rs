use clap::Parser;

/// passforge - Targeted password-candidate list generation.
///
/// This tool combines a base text (e.g. a name) with phone-derived substrings, numeric tokens and separators into a deduplicated, length-filtered candidate list for personal-use password recovery testing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CliArgs {
    /// Base text (e.g. a name). Prompted for interactively when omitted.
    #[clap(short, long)]
    pub(crate) base: Option<String>,

    /// Phone number (optional; non-digit characters are stripped). Prompted for interactively when omitted.
    #[clap(short, long)]
    pub(crate) phone: Option<String>,

    /// Output file for the generated list (default: passwords.txt)
    #[clap(short, long)]
    pub(crate) out: Option<std::path::PathBuf>,

    /// Separator symbols written without spaces (e.g. '@*&#'). Overrides the default catalog; the empty separator is always included.
    #[clap(short, long)]
    pub(crate) symbols: Option<String>,

    /// Also generate case variants for every prefix of the base text ("s", "so", "sou", ...)
    #[clap(long)]
    pub(crate) include_prefixes: bool,

    /// Minimum candidate length, inclusive (default: 8)
    #[clap(long)]
    pub(crate) min_length: Option<usize>,

    /// Maximum candidate length, inclusive (default: 16)
    #[clap(long)]
    pub(crate) max_length: Option<usize>,

    /// Keep first-seen generation order instead of sorting by (length, lexical)
    #[clap(long)]
    pub(crate) unsorted: bool,

    /// Path to an optional YAML configuration file
    #[clap(short, long)]
    pub(crate) config: Option<std::path::PathBuf>,
}
