//! Tests for raw value decoding.

use std::time::Duration;

use super::decode::{
    Timeout, decode_or, expand, expand_path, parse_bool, parse_int, parse_time, split_command,
};
use super::error::ValueError;
use crate::settings::MarkupMode;
use crate::test_support::count_warnings;

mod booleans {
    use super::*;

    #[test]
    fn accepted_spellings() {
        for raw in ["true", "yes", "on", "1", "TRUE", "Yes", " on "] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "no", "off", "0", "False", "NO"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn rejects_other_values() {
        assert_eq!(parse_bool("maybe"), Err(ValueError::Bool("maybe".to_string())));
        assert!(parse_bool("").is_err());
        assert!(parse_bool("2").is_err());
    }
}

mod integers {
    use super::*;

    #[test]
    fn parses_with_whitespace() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int(" -7 "), Ok(-7));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(parse_int("4.2"), Err(ValueError::Int("4.2".to_string())));
        assert!(parse_int("abc").is_err());
        assert!(parse_int("99999999999").is_err());
    }
}

mod durations {
    use super::*;

    #[test]
    fn bare_number_is_seconds() {
        assert_eq!(parse_time("10"), Ok(Timeout::from_secs(10)));
    }

    #[test]
    fn units() {
        assert_eq!(parse_time("500ms"), Ok(Timeout::After(Duration::from_millis(500))));
        assert_eq!(parse_time("3s"), Ok(Timeout::from_secs(3)));
        assert_eq!(parse_time("2m"), Ok(Timeout::from_secs(120)));
        assert_eq!(parse_time("1h"), Ok(Timeout::from_secs(3600)));
        assert_eq!(parse_time("1d"), Ok(Timeout::from_secs(86_400)));
        assert_eq!(parse_time("5 s"), Ok(Timeout::from_secs(5)));
    }

    #[test]
    fn non_positive_is_infinite() {
        assert_eq!(parse_time("0"), Ok(Timeout::Infinite));
        assert_eq!(parse_time("-1"), Ok(Timeout::Infinite));
        assert_eq!(parse_time("0ms"), Ok(Timeout::Infinite));
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["", "s", "10x", "ten", "1.5s"] {
            assert_eq!(parse_time(raw), Err(ValueError::Time(raw.to_string())), "{raw:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_time("9223372036854775807d").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Timeout::Infinite.to_string(), "infinite");
        assert_eq!(Timeout::from_secs(2).to_string(), "2000ms");
        assert!(Timeout::Infinite.is_infinite());
        assert_eq!(Timeout::from_secs(1).as_duration(), Some(Duration::from_secs(1)));
    }
}

mod expansion {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert_eq!(expand_path("~/icons"), home.join("icons"));
        assert_eq!(expand("~"), home.display().to_string());
    }

    #[test]
    fn tilde_only_at_start() {
        assert_eq!(expand("/a/~/b"), "/a/~/b");
        assert_eq!(expand("~user/x"), "~user/x");
    }

    #[test]
    fn environment_variables() {
        // PATH is set in every test environment.
        let path = std::env::var("PATH").unwrap();

        assert_eq!(expand("$PATH"), path);
        assert_eq!(expand("${PATH}/x"), format!("{path}/x"));
    }

    #[test]
    fn unset_variable_is_empty() {
        assert_eq!(expand("a$TOASTD_SURELY_UNSET_VARIABLE/b"), "a/b");
    }

    #[test]
    fn lone_dollar_is_literal() {
        assert_eq!(expand("cost $ 5"), "cost $ 5");
        assert_eq!(expand("end$"), "end$");
        assert_eq!(expand("${unterminated"), "${unterminated");
    }
}

mod commands {
    use super::*;

    #[test]
    fn splits_with_quotes() {
        let (argv, warnings) = count_warnings(|| split_command("dmenu -p 'toastd menu:'", "dmenu"));

        assert_eq!(
            argv,
            Some(vec!["dmenu".to_string(), "-p".to_string(), "toastd menu:".to_string()])
        );
        assert_eq!(warnings, 0);
    }

    #[test]
    fn unbalanced_quote_disables_feature() {
        let (argv, warnings) = count_warnings(|| split_command("dmenu -p 'oops", "dmenu"));

        assert_eq!(argv, None);
        assert_eq!(warnings, 1);
    }

    #[test]
    fn empty_command_disables_feature() {
        let (argv, warnings) = count_warnings(|| split_command("   ", "browser"));

        assert_eq!(argv, None);
        assert_eq!(warnings, 1);
    }
}

mod enums {
    use super::*;

    #[test]
    fn unknown_value_warns_once_and_falls_back() {
        let (mode, warnings) = count_warnings(|| decode_or("bogus", MarkupMode::No));

        assert_eq!(mode, MarkupMode::No);
        assert_eq!(warnings, 1);
    }
}
