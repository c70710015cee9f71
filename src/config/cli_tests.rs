//! Tests for CLI argument parsing.

use std::path::Path;

use super::cli::{CmdlineArgs, Command};
use super::flags::{self, FlagKind};
use super::source::CmdlineSource;
use crate::test_support::cli;

#[test]
fn command_is_well_formed() {
    CmdlineArgs::command().debug_assert();
}

mod parsing {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = cli(&[]);

        assert!(args.cli().command.is_none());
        assert!(args.cli().config.is_none());
        assert!(!args.is_init());
    }

    #[test]
    fn config_path_spellings() {
        for spelling in ["--config", "--conf", "-c"] {
            let args = cli(&[spelling, "/tmp/toastdrc.toml"]);
            assert_eq!(
                args.cli().config.as_deref(),
                Some(Path::new("/tmp/toastdrc.toml")),
                "{spelling}"
            );
        }
    }

    #[test]
    fn config_from_stdin() {
        let args = cli(&["--config", "-"]);
        assert_eq!(args.cli().config.as_deref(), Some(Path::new("-")));
    }

    #[test]
    fn init_default_output() {
        let args = cli(&["init"]);

        assert!(args.is_init());
        match &args.cli().command {
            Some(Command::Init { output }) => assert_eq!(output, Path::new("toastdrc.toml")),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn init_custom_output() {
        let args = cli(&["init", "-o", "custom.toml"]);

        match &args.cli().command {
            Some(Command::Init { output }) => assert_eq!(output, Path::new("custom.toml")),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn dump_subcommand() {
        let args = cli(&["dump"]);
        assert!(matches!(args.cli().command, Some(Command::Dump)));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = CmdlineArgs::try_parse_from_iter(["toastd", "--no-such-flag", "1"]);
        assert!(result.is_err());
    }
}

mod overrides {
    use super::*;

    #[test]
    fn value_flag() {
        let args = cli(&["--font", "Sans 9"]);
        assert_eq!(args.get(flags::FONT.names), Some("Sans 9"));
    }

    #[test]
    fn alias_spelling_is_found_under_every_spelling() {
        let args = cli(&["--fn", "Sans 9"]);

        assert_eq!(args.get(flags::FONT.names), Some("Sans 9"));
        assert_eq!(args.get(&["fn"]), Some("Sans 9"));
        assert_eq!(args.get(&["font"]), Some("Sans 9"));
    }

    #[test]
    fn unset_flag_is_absent() {
        let args = cli(&["--font", "Sans 9"]);

        assert_eq!(args.get(flags::FORMAT.names), None);
        assert!(!args.is_set(flags::SORT.names));
    }

    #[test]
    fn bare_toggle_means_true() {
        let args = cli(&["--sort"]);
        assert_eq!(args.get(flags::SORT.names), Some("true"));
    }

    #[test]
    fn toggle_accepts_explicit_value() {
        let args = cli(&["--sort=false", "--shrink=yes"]);

        assert_eq!(args.get(flags::SORT.names), Some("false"));
        assert_eq!(args.get(flags::SHRINK.names), Some("yes"));
    }

    #[test]
    fn toggle_value_needs_equals_sign() {
        let result = CmdlineArgs::try_parse_from_iter(["toastd", "--sort", "false"]);
        assert!(result.is_err());
    }

    #[test]
    fn urgency_flags() {
        let args = cli(&["--lb", "#000000", "--cto", "0", "--nfr", "#123456"]);

        assert_eq!(args.get(flags::LOW_BACKGROUND.names), Some("#000000"));
        assert_eq!(args.get(flags::CRITICAL_TIMEOUT.names), Some("0"));
        assert_eq!(args.get(flags::NORMAL_FRAME.names), Some("#123456"));
    }

    #[test]
    fn unknown_spellings_are_absent() {
        let args = cli(&["--font", "Sans 9"]);
        assert_eq!(args.get(&["not_a_flag"]), None);
        assert_eq!(args.get(&[]), None);
    }

    #[test]
    fn print_switch() {
        assert_eq!(cli(&["--print"]).get(flags::PRINT.names), Some("true"));
        assert_eq!(cli(&[]).get(flags::PRINT.names), None);
    }
}

mod flag_table {
    use super::*;

    #[test]
    fn every_spelling_looks_up_its_flag() {
        for flag in flags::ALL {
            for name in flag.names {
                let found = flags::lookup(name).unwrap();
                assert_eq!(found.id(), flag.id(), "{name}");
            }
        }
    }

    #[test]
    fn spellings_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for flag in flags::ALL {
            for name in flag.names {
                assert!(seen.insert(*name), "duplicate spelling {name}");
            }
        }
    }

    #[test]
    fn toggles_are_boolean_settings() {
        let toggles: Vec<&str> = flags::ALL
            .iter()
            .filter(|flag| flag.kind == FlagKind::Toggle)
            .map(|flag| flag.id())
            .collect();

        assert!(toggles.contains(&"sort"));
        assert!(toggles.contains(&"print"));
        assert!(!toggles.contains(&"font"));
    }
}
