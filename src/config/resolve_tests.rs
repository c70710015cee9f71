//! Tests for three-tier option resolution.

use std::path::PathBuf;

use super::decode::Timeout;
use super::resolve::Resolver;
use super::source::NoCmdline;
use crate::settings::{Alignment, FollowMode};
use crate::test_support::{FakeCmdline, cli, count_warnings, file};

const FONT: &[&str] = &["font", "fn"];

mod precedence {
    use super::*;

    #[test]
    fn cmdline_wins_over_file_and_default() {
        let config = file("[global]\nfont = \"File 10\"\n");
        let cmdline = FakeCmdline(vec![("fn", "Flag 12")]);
        let r = Resolver::new(&config, &cmdline);

        assert_eq!(r.string("global", "font", FONT, "Default 8"), "Flag 12");
    }

    #[test]
    fn file_wins_over_default() {
        let config = file("[global]\nfont = \"File 10\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.string("global", "font", FONT, "Default 8"), "File 10");
    }

    #[test]
    fn default_when_unset() {
        let config = file("[global]\nformat = \"%s\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.string("global", "font", FONT, "Default 8"), "Default 8");
        assert_eq!(r.int("global", "monitor", &[], 3), 3);
        assert_eq!(r.time("global", "idle", &[], Timeout::Infinite), Timeout::Infinite);
    }

    #[test]
    fn key_in_other_section_does_not_count() {
        let config = file("[urgency_low]\nfont = \"Elsewhere\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.string("global", "font", FONT, "Default 8"), "Default 8");
    }

    #[test]
    fn setting_without_flag_ignores_cmdline() {
        let config = file("[experimental]\nper_monitor_dpi = true\n");
        let cmdline = FakeCmdline(vec![("per_monitor_dpi", "false")]);
        let r = Resolver::new(&config, &cmdline);

        assert!(r.bool("experimental", "per_monitor_dpi", &[], false));
    }

    #[test]
    fn real_command_line_overrides_file() {
        let config = file("[global]\nsort = true\nmonitor = 1\n");
        let args = cli(&["--sort=false", "--mon", "2"]);
        let r = Resolver::new(&config, &args);

        assert!(!r.bool("global", "sort", &["sort"], true));
        assert_eq!(r.int("global", "monitor", &["monitor", "mon"], 0), 2);
    }
}

mod typed {
    use super::*;

    #[test]
    fn numbers_and_booleans_from_toml_scalars() {
        let config = file("[global]\nsort = false\nhistory_length = 5\ntimeout = 3\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert!(!r.bool("global", "sort", &[], true));
        assert_eq!(r.int("global", "history_length", &[], 20), 5);
        assert_eq!(r.time("global", "timeout", &[], Timeout::Infinite), Timeout::from_secs(3));
    }

    #[test]
    fn decode_failure_warns_once_and_keeps_default() {
        let config = file("[global]\nhistory_length = \"many\"\nsort = \"perhaps\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        let ((length, sort), warnings) = count_warnings(|| {
            (
                r.int("global", "history_length", &[], 20),
                r.bool("global", "sort", &[], true),
            )
        });

        assert_eq!(length, 20);
        assert!(sort);
        assert_eq!(warnings, 2);
    }

    #[test]
    fn optional_string_distinguishes_empty_from_unset() {
        let config = file("[global]\nformat = \"\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.opt_string("global", "format", &[]), Some(String::new()));
        assert_eq!(r.opt_string("global", "font", &[]), None);
    }

    #[test]
    fn path_is_expanded() {
        let config = file("[global]\nicons = \"${TOASTD_UNSET_FOR_TEST}/icons\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.path("global", "icons", &[], "/default"), PathBuf::from("/icons"));
        assert_eq!(r.path("global", "missing", &[], "/default"), PathBuf::from("/default"));
    }

    #[test]
    fn command_is_expanded_but_not_split() {
        let config = file("[global]\ndmenu = \"$TOASTD_UNSET_FOR_TEST/dmenu -p x\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.command("global", "dmenu", &[], "dmenu"), "/dmenu -p x");
    }

    #[test]
    fn choice_decodes_known_values() {
        let config = file("[global]\nfollow = \"keyboard\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        assert_eq!(r.choice("global", "follow", &[], FollowMode::None), FollowMode::Keyboard);
    }

    #[test]
    fn choice_keeps_default_for_empty_value_without_warning() {
        let config = file("[global]\nalignment = \"\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        let (alignment, warnings) =
            count_warnings(|| r.choice("global", "alignment", &[], Alignment::Right));

        assert_eq!(alignment, Alignment::Right);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn choice_warns_on_unknown_value() {
        let config = file("[global]\nalignment = \"justify\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        let (alignment, warnings) =
            count_warnings(|| r.choice("global", "alignment", &[], Alignment::Center));

        assert_eq!(alignment, Alignment::Center);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn switch_reads_only_the_command_line() {
        let config = file("[global]\nprint = true\n");
        let r = Resolver::new(&config, &NoCmdline);
        assert!(!r.switch(&["print"], false));

        let cmdline = FakeCmdline(vec![("print", "true")]);
        let r = Resolver::new(&config, &cmdline);
        assert!(r.switch(&["print"], false));
    }

    #[test]
    fn resolution_has_no_side_effects() {
        let config = file("[global]\nfont = \"A\"\n");
        let r = Resolver::new(&config, &NoCmdline);

        let first = r.string("global", "font", FONT, "B");
        let second = r.string("global", "font", FONT, "B");
        assert_eq!(first, second);
    }
}
