use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use libshuangpin::{match_keys, Config, Scheme, SchemeRegistry};

#[derive(Parser)]
#[command(name = "libshuangpin", about = "Shuangpin codec and practice tool")]
struct Cli {
    /// Scheme name; unknown names fall back to the default scheme.
    #[arg(long)]
    scheme: Option<String>,

    /// Optional trainer config (TOML); supplies the scheme when --scheme
    /// is absent.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known scheme names.
    Schemes,
    /// Show the two-keystroke code for a syllable.
    Encode { syllable: String },
    /// Show the syllable a code resolves to.
    Decode { code: String },
    /// Show the fragment sets a key can produce.
    Key { key: char },
    /// Read "<target> <keys>" lines and report match results.
    Practice,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    let requested = cli.scheme.as_deref().unwrap_or(&config.scheme);

    let registry = SchemeRegistry::new();

    if let Command::Schemes = cli.command {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // The remaining subcommands all operate on a resolved scheme. The
    // stderr notice is the user-visible counterpart of the library's
    // tracing warning; the binary installs no subscriber.
    let scheme = registry.get(requested);
    if scheme.name() != requested {
        eprintln!(
            "unknown scheme '{}', using '{}'",
            requested,
            scheme.name()
        );
    }

    match cli.command {
        // Handled before scheme resolution.
        Command::Schemes => {}
        Command::Encode { syllable } => match scheme.code_for(&syllable) {
            Some(code) => println!("{}", code),
            None => println!("(no code for '{}' under {})", syllable, scheme.name()),
        },
        Command::Decode { code } => match scheme.syllable_for(&code) {
            Some(syllable) => println!("{}", syllable),
            None => println!("(no syllable for '{}' under {})", code, scheme.name()),
        },
        Command::Key { key } => {
            println!("leads:   {}", scheme.leads_of(key).join(", "));
            println!("follows: {}", scheme.follows_of(key).join(", "));
        }
        Command::Practice => practice(&scheme)?,
    }

    Ok(())
}

/// Line-oriented practice loop: each line is a target syllable followed by
/// the keys typed so far (0-2 characters).
fn practice(scheme: &Scheme) -> io::Result<()> {
    println!("scheme: {} — enter '<target> <keys>', 'quit' to exit", scheme.name());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let mut parts = line.split_whitespace();
        let target = parts.next().unwrap_or_default();
        let mut keys = parts.next().unwrap_or_default().chars();

        let result = match_keys(scheme, keys.next(), keys.next(), target);
        if result.valid {
            println!(
                "✓ {} = {} + {}",
                target,
                result.lead.unwrap_or_default(),
                result.follow.unwrap_or_default()
            );
        } else {
            println!(
                "… lead: {}  follow: {}",
                result.lead.as_deref().unwrap_or("?"),
                result.follow.as_deref().unwrap_or("?")
            );
        }
    }

    Ok(())
}
