//! Translation of a [`FlagSet`] into a `clap` command.

use clap::{Arg, ArgAction, Command};

use super::{Flag, FlagSet};

/// Id of the positional catch-all. Flag names cannot contain `=`, so it
/// never clashes with a registered flag.
pub(super) const ARGS_ID: &str = "=args";

impl FlagSet<'_> {
    pub(super) fn command(&self) -> Command {
        Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(self.lookup("help").is_some())
            .args(self.flags.iter().map(flag_arg))
            .arg(
                Arg::new(ARGS_ID)
                    .value_name("ARGS")
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .action(ArgAction::Append),
            )
    }
}

fn flag_arg(flag: &Flag<'_>) -> Arg {
    let arg = Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .help(help_text(flag))
        .action(ArgAction::Append);
    if flag.is_bool_flag() {
        arg.num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg.num_args(1)
            .value_name(flag.kind)
            .allow_hyphen_values(true)
    }
}

/// Zero defaults are left out of the help text.
fn help_text(flag: &Flag<'_>) -> String {
    if flag.default_is_zero {
        flag.usage.clone()
    } else if flag.usage.is_empty() {
        format!("(default {})", flag.default_value)
    } else {
        format!("{} (default {})", flag.usage, flag.default_value)
    }
}
