// ============================================================================
// encgraph-cli/src/cli.rs
// ============================================================================
//
// COMMAND LINE INTERFACE: Argument definitions
//
// The tool takes a single optional positional argument, the chart title.
// Input locations come from the working directory layout and the
// ENCGRAPH_REF_DIR / ENCGRAPH_DIS_DIR environment variables.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "encgraph: compare encoders by VMAF, encode time and file size",
    long_about = "Scores every distorted file under the distorted directory against its \
                  reference with VMAF, joins the results with the encode timing log and \
                  writes a three-panel chart grouped by encoder."
)]
pub struct Cli {
    /// Chart title (default: "SVT-AV1 vs libaom")
    #[arg(value_name = "TITLE")]
    pub title: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_title_is_optional() {
        let cli = Cli::parse_from(["encgraph"]);
        assert!(cli.title.is_none());
        assert!(!cli.verbose);

        let cli = Cli::parse_from(["encgraph", "-v", "rav1e vs SVT-AV1"]);
        assert_eq!(cli.title.as_deref(), Some("rav1e vs SVT-AV1"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["encgraph", "one", "two"]).is_err());
    }
}
