use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Parser;
use tg_md2html::{ConvertOptions, Converter};

#[derive(Parser)]
#[command(about = "Convert Telegram-flavoured Markdown to Bot API HTML", version)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Markdown files to convert
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct FormatOpts {
    /// Emit the output without HTML escaping
    #[arg(long = "no-escape")]
    no_escape: bool,
    /// Leave unterminated code fences open
    #[arg(long = "no-auto-close")]
    no_auto_close: bool,
}

fn build_converter(opts: FormatOpts) -> Converter {
    Converter::with_options(ConvertOptions {
        escape_html: !opts.no_escape,
        auto_close_code_blocks: !opts.no_auto_close,
        ..ConvertOptions::default()
    })
}

fn rewrite_path(path: &Path, converter: &Converter) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, converter.convert(&content) + "\n")
}

/// Entry point for the command-line converter.
///
/// Converts the given Markdown files (or standard input when none are given)
/// and prints the resulting HTML, or rewrites the files when `--in-place` is
/// set.
///
/// # Examples
///
/// ```sh
/// # Convert a message file and print the HTML
/// tg-md2html message.md
///
/// # Convert standard input
/// echo '**bold**' | tg-md2html
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let converter = build_converter(cli.opts);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", converter.convert(&input));
        return Ok(());
    }

    for path in cli.files {
        if cli.in_place {
            rewrite_path(&path, &converter)?;
        } else {
            let content = fs::read_to_string(&path)?;
            println!("{}", converter.convert(&content));
        }
    }

    Ok(())
}
