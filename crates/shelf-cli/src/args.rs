use clap::Parser;

/// Personal library tracker
///
/// Shelf keeps a list of your books for the length of one session: add
/// titles, lend them out for seven days, mark wishlist entries and favorites,
/// and search the list. Commands are read from standard input one per line;
/// type `help` for the list of commands.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Start with an empty catalog instead of the sample books
    #[arg(long)]
    pub empty: bool,

    /// IANA time zone used to count due dates in calendar days. Defaults to
    /// the system time zone
    #[arg(long, value_name = "ZONE")]
    pub time_zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["shelf"]);
        assert!(!args.no_color);
        assert!(!args.empty);
        assert_eq!(args.time_zone, None);
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["shelf", "--no-color", "--empty", "--time-zone", "UTC"]);
        assert!(args.no_color);
        assert!(args.empty);
        assert_eq!(args.time_zone.as_deref(), Some("UTC"));
    }
}
