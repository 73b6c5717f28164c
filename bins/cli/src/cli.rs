//! Command-line argument parsing.

use std::path::PathBuf;

/// Usage text printed for `help` and argument errors.
pub const USAGE: &str = "\
Usage: travelmate <command>

Commands:
  balances [--group <name>]   Show who should pay and who should receive
  summary                     Show total spend, categories, and group ledgers
  export                      Print every collection as JSON
  import <file>               Replace collections from an exported JSON file
  help                        Show this message";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print balances, across everything or for one group.
    Balances {
        /// Group name filter.
        group: Option<String>,
    },
    /// Print the spend summary.
    Summary,
    /// Print a snapshot to stdout.
    Export,
    /// Import a snapshot file.
    Import {
        /// Snapshot path.
        path: PathBuf,
    },
    /// Print usage.
    Help,
}

/// Parses arguments, excluding the program name.
///
/// # Errors
///
/// Returns a message naming the bad argument.
pub fn parse<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    let parsed = match command.as_str() {
        "balances" => {
            let mut group = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--group" | "-g" => {
                        let name = args
                            .next()
                            .ok_or_else(|| "--group needs a group name".to_string())?;
                        group = Some(name);
                    }
                    other => return Err(format!("unexpected argument: {other}")),
                }
            }
            Command::Balances { group }
        }
        "summary" => Command::Summary,
        "export" => Command::Export,
        "import" => {
            let path = args
                .next()
                .ok_or_else(|| "import needs a file path".to_string())?;
            Command::Import {
                path: PathBuf::from(path),
            }
        }
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(format!("unknown command: {other}")),
    };

    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument: {extra}"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(Vec::<String>::new()), Ok(Command::Help));
    }

    #[test]
    fn test_balances() {
        assert_eq!(parse(["balances"]), Ok(Command::Balances { group: None }));
        assert_eq!(
            parse(["balances", "--group", "Europe Trip"]),
            Ok(Command::Balances {
                group: Some("Europe Trip".to_string())
            })
        );
        assert!(parse(["balances", "--group"]).is_err());
        assert!(parse(["balances", "--verbose"]).is_err());
    }

    #[test]
    fn test_import_needs_path() {
        assert_eq!(
            parse(["import", "backup.json"]),
            Ok(Command::Import {
                path: PathBuf::from("backup.json")
            })
        );
        assert!(parse(["import"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_and_extra_arguments() {
        assert_eq!(
            parse(["settle"]),
            Err("unknown command: settle".to_string())
        );
        assert_eq!(
            parse(["summary", "now"]),
            Err("unexpected argument: now".to_string())
        );
    }
}
