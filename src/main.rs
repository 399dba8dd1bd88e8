// SPDX-License-Identifier: MPL-2.0
use iced_flipbook::app::{self, Flags};
use iced_flipbook::logging;
use std::ffi::OsString;

const HELP: &str = "\
iced_flipbook

USAGE:
  iced_flipbook [OPTIONS] [FOLDER]

OPTIONS:
  --pages N            Number of pages (page1..pageN)
  --folder DIR         Folder holding the page images
  --format EXT         Image file extension (default: jpg)
  --lang LOCALE        Interface language, e.g. en-US or fr
  --config-dir DIR     Directory holding settings.toml
  -v, --verbose        Log at debug level
  -h, --help           Print this help
";

/// Parses CLI flags, returning any arguments left unconsumed.
fn parse_flags(
    mut args: pico_args::Arguments,
) -> Result<(Flags, Vec<OsString>), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let pages = args.opt_value_from_str("--pages")?;
    let folder_flag: Option<String> = args.opt_value_from_str("--folder")?;
    let format = args.opt_value_from_str("--format")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let verbose = args.contains(["-v", "--verbose"]);
    let positional: Option<String> = args.opt_free_from_str()?;

    let flags = Flags {
        lang,
        pages,
        folder: folder_flag.or(positional),
        format,
        config_dir,
        verbose,
    };
    Ok((flags, args.finish()))
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, remaining) = match parse_flags(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(flags.verbose);
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognised arguments");
    }
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, pico_args::Error> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        parse_flags(pico_args::Arguments::from_vec(args)).map(|(flags, _)| flags)
    }

    #[test]
    fn parses_all_options() {
        let flags = parse(&[
            "--pages", "24", "--folder", "scans", "--format", "png", "--lang", "fr",
            "--config-dir", "/tmp/cfg", "--verbose",
        ])
        .unwrap();
        assert_eq!(flags.pages, Some(24));
        assert_eq!(flags.folder.as_deref(), Some("scans"));
        assert_eq!(flags.format.as_deref(), Some("png"));
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
        assert!(flags.verbose);
    }

    #[test]
    fn positional_folder_is_used_when_flag_is_absent() {
        let flags = parse(&["book"]).unwrap();
        assert_eq!(flags.folder.as_deref(), Some("book"));
        assert!(!flags.verbose);
    }

    #[test]
    fn unknown_arguments_are_returned() {
        let args = vec![OsString::from("a"), OsString::from("b")];
        let (flags, remaining) = parse_flags(pico_args::Arguments::from_vec(args)).unwrap();
        assert_eq!(flags.folder.as_deref(), Some("a"));
        assert_eq!(remaining, vec![OsString::from("b")]);
    }

    #[test]
    fn invalid_page_count_is_an_error() {
        assert!(parse(&["--pages", "many"]).is_err());
    }
}
