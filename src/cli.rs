use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CliCommand {
    Run(Arguments),
    Help,
    Version,
}

/// Options for running the game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Explicit configuration file; unlike the default one, it must exist
    pub(crate) config: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) no_mouse: bool,
}

impl CliCommand {
    pub(crate) const USAGE: &'static str = concat!(
        "Usage: snake-adventure [<options>]\n",
        "\n",
        "Steer a snake around a field of rocks, eating apples as you go.\n",
        "\n",
        "Options:\n",
        "  -c, --config <path>   Read configuration from the given file\n",
        "      --log-file <path> Append log messages to the given file\n",
        "      --no-mouse        Do not steer with the mouse\n",
        "  -h, --help            Display this help message and exit\n",
        "  -V, --version         Show the program version and exit\n",
    );

    pub(crate) fn from_parser(mut parser: Parser) -> Result<CliCommand, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("no-mouse") => args.no_mouse = true,
                Arg::Short('h') | Arg::Long("help") => return Ok(CliCommand::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(CliCommand::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(CliCommand::Run(args))
    }
}
