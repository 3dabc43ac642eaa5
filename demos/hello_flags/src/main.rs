//! Hello flags demo: bind a greeting config to flags, parse argv, greet.

use std::io::{self, Write as _};
use std::thread;
use std::time::Duration;

use flagger::{FlagError, Flags};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command-line options for the greeting.
#[derive(Debug, Default, Flags)]
struct Greeting {
    #[flag("name,world,who to greet")]
    pub name: String,
    #[flag("times,1,how many greetings to print")]
    pub times: usize,
    #[flag("excited,,end with an exclamation mark")]
    pub excited: bool,
    #[flag("pause,0s,delay between greetings")]
    pub pause: Duration,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let greeting = parse_greeting()?;
    debug!(?greeting, "parsed greeting");
    greet(&greeting)?;
    Ok(())
}

fn parse_greeting() -> Result<Greeting, FlagError> {
    match flagger::parse_from(std::env::args_os()) {
        Ok(greeting) => Ok(greeting),
        Err(err) => {
            if let FlagError::CliParsing(inner) = &err
                && err.is_display_request()
            {
                inner.exit();
            }
            Err(err)
        }
    }
}

fn greet(greeting: &Greeting) -> io::Result<()> {
    let punctuation = if greeting.excited { '!' } else { '.' };
    let mut stdout = io::stdout().lock();
    for round in 0..greeting.times {
        if round > 0 && !greeting.pause.is_zero() {
            stdout.flush()?;
            thread::sleep(greeting.pause);
        }
        writeln!(stdout, "Hello, {}{punctuation}", greeting.name)?;
    }
    Ok(())
}
