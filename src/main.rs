// SPDX-License-Identifier: MPL-2.0
use folio_i18n::config::DEFAULT_LOG_FILTER;
use folio_i18n::i18n::{DocumentAttributes, I18n, LocaleChange, SettingsFile};
use folio_i18n::paths;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio-i18n: resolve portfolio display strings

USAGE:
  folio-i18n [OPTIONS] [KEY]...

OPTIONS:
  --lang CODE         Select and remember a locale
  --config-dir DIR    Use DIR instead of the platform config directory
  --list              List supported locales
  --check             Verify the default table is complete
  -h, --help          Print this help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    list: bool,
    check: bool,
    keys: Vec<String>,
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let list = args.contains("--list");
    let check = args.contains("--check");

    let mut keys = Vec::new();
    for arg in args.finish() {
        let arg = arg
            .into_string()
            .map_err(|arg| format!("invalid UTF-8 argument {:?}", arg))?;
        // Keys never start with '-', so this is a mistyped flag.
        if arg.starts_with('-') {
            return Err(format!("unknown option '{}'", arg));
        }
        keys.push(arg);
    }

    Ok(Some(Flags {
        lang,
        config_dir,
        list,
        check,
        keys,
    }))
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {}\n\n{}", error, HELP);
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir);
    let Some(settings) = SettingsFile::in_config_dir(None) else {
        eprintln!("error: could not determine a config directory, use --config-dir");
        return ExitCode::FAILURE;
    };

    let i18n = match I18n::from_settings(settings) {
        Ok(i18n) => i18n,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };
    let store = i18n.store();
    let document = DocumentAttributes::attach(&store);

    if let Some(code) = flags.lang.as_deref() {
        if i18n.set_locale(code) == LocaleChange::Unsupported {
            eprintln!(
                "warning: unsupported locale '{}', keeping '{}'",
                code,
                i18n.active_locale()
            );
        }
    }

    let mut status = ExitCode::SUCCESS;

    if flags.check {
        let issues = i18n.resolver().catalog().completeness_issues();
        for issue in &issues {
            println!("{}", issue);
        }
        if issues.is_empty() {
            println!("default table complete");
        } else {
            status = ExitCode::FAILURE;
        }
    }

    if flags.list {
        let catalog = i18n.resolver().catalog();
        for locale in i18n.supported_locales() {
            let marker = if *locale == i18n.active_locale() { '*' } else { ' ' };
            let coverage = catalog.coverage(*locale);
            println!(
                "{} {} {} {:<10} {} {:>3.0}%",
                marker,
                locale.code(),
                locale.glyph(),
                locale.display_name(),
                locale.direction(),
                coverage.ratio() * 100.0
            );
        }
        println!("lang={} dir={}", document.lang(), document.dir());
    }

    for key in &flags.keys {
        println!("{}", i18n.tr(key));
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, String> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn keys_and_flags_are_separated() {
        let flags = parse(&["--lang", "fr", "nav.home", "--list", "hero.title"])
            .expect("valid arguments")
            .expect("not help");
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert!(flags.list);
        assert!(!flags.check);
        assert_eq!(flags.keys, vec!["nav.home", "hero.title"]);
    }

    #[test]
    fn mistyped_flag_is_rejected() {
        let error = parse(&["--lsit"]).err().expect("unknown flag");
        assert!(error.contains("--lsit"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["nav.home", "-h"]).expect("valid").is_none());
    }
}
