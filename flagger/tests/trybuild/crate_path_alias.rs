//! Trybuild fixture verifying `#[flagger(crate = "...")]` works with a
//! dependency rename via `use ... as`.

use flagger as cli_flags;
use cli_flags::{FlagSet, Flags};

/// Verifies that generated code reaches the runtime through `cli_flags`.
#[derive(Default, Flags)]
#[flagger(crate = "cli_flags")]
struct Aliased {
    #[flag("name,alias,who")]
    pub name: String,
    #[flag = "count,2,how many"]
    pub count: u64,
}

fn main() {
    let mut config = Aliased::default();
    let mut flags = FlagSet::new("alias");
    let result: Result<(), cli_flags::FlagError> = cli_flags::bind(&mut flags, &mut config);
    let _ = result;
}
