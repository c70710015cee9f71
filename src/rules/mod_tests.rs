//! Tests for the rule table.

use std::path::PathBuf;

use crate::config::Timeout;
use crate::rules::{Rule, RuleSet, build, default_rules};
use crate::settings::{Fullscreen, MarkupMode, Urgency};
use crate::test_support::{capture, count_warnings, file};

mod seeding {
    use super::*;

    #[test]
    fn empty_config_yields_default_rules() {
        let rules = build(&file(""));
        let expected: Vec<Rule> = default_rules();

        assert!(!rules.is_empty());
        assert_eq!(rules.iter().cloned().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn default_rule_contents() {
        let rules = RuleSet::with_defaults();

        let transient = rules.get("ignore_transient_in_history").unwrap();
        assert_eq!(transient.match_transient, Some(true));
        assert_eq!(transient.history_ignore, Some(true));

        let critical = rules.get("fullscreen_show_critical").unwrap();
        assert_eq!(critical.msg_urgency, Some(Urgency::Critical));
        assert_eq!(critical.fullscreen, Some(Fullscreen::Show));
    }

    #[test]
    fn reserved_sections_are_not_rules() {
        let rules = build(&file(
            "[global]\nfont = \"x\"\n[frame]\nwidth = 1\n[experimental]\n[shortcuts]\n\
             [urgency_low]\n[urgency_normal]\n[urgency_critical]\n",
        ));

        assert_eq!(rules.len(), default_rules().len());
    }
}

mod merging {
    use super::*;

    #[test]
    fn sparse_section_sets_only_its_keys() {
        let rules = build(&file("[myapp]\ntimeout = 5\n"));
        let rule = rules.get("myapp").unwrap();

        assert_eq!(
            *rule,
            Rule {
                timeout: Some(Timeout::from_secs(5)),
                ..Rule::named("myapp")
            }
        );
    }

    #[test]
    fn user_rules_follow_defaults_in_file_order() {
        let rules = build(&file("[b]\nbody = \"1\"\n[a]\nbody = \"2\"\n"));
        let names: Vec<&str> = rules.iter().map(|rule| rule.name.as_str()).collect();

        assert_eq!(
            names,
            ["ignore_transient_in_history", "fullscreen_show_critical", "b", "a"]
        );
    }

    #[test]
    fn section_named_like_default_rule_merges_into_it() {
        let rules = build(&file("[fullscreen_show_critical]\nfullscreen = \"delay\"\n"));
        let rule = rules.get("fullscreen_show_critical").unwrap();

        assert_eq!(rules.len(), default_rules().len());
        assert_eq!(rule.fullscreen, Some(Fullscreen::Delay));
        assert_eq!(rule.msg_urgency, Some(Urgency::Critical));
    }

    #[test]
    fn invalid_value_keeps_current_value() {
        let (rules, warnings) = count_warnings(|| {
            build(&file(
                "[fullscreen_show_critical]\nfullscreen = \"sometimes\"\nmsg_urgency = \"urgent\"\n",
            ))
        });
        let rule = rules.get("fullscreen_show_critical").unwrap();

        assert_eq!(rule.fullscreen, Some(Fullscreen::Show));
        assert_eq!(rule.msg_urgency, Some(Urgency::Critical));
        assert_eq!(warnings, 2);
    }

    #[test]
    fn invalid_value_on_new_rule_stays_absent() {
        let (rules, warnings) =
            count_warnings(|| build(&file("[x]\nmarkup = \"bold\"\nhistory_ignore = \"maybe\"\n")));
        let rule = rules.get("x").unwrap();

        assert_eq!(rule.markup, None);
        assert_eq!(rule.history_ignore, None);
        assert_eq!(warnings, 2);
    }

    #[test]
    fn all_keys_are_recognized() {
        let (rules, warnings) = count_warnings(|| {
            build(&file(
                r##"
                [everything]
                appname = "app"
                summary = "sum*"
                body = "body*"
                icon = "icon"
                category = "email"
                stack_tag = "tag"
                msg_urgency = "low"
                match_transient = false
                timeout = "500ms"
                urgency = "critical"
                markup = "yes"
                history_ignore = true
                set_transient = true
                fullscreen = "pushback"
                new_icon = "new"
                foreground = "#111111"
                background = "#222222"
                frame_color = "#333333"
                format = "%s"
                script = "/usr/bin/notify-hook"
                set_stack_tag = "other"
                "##,
            ))
        });

        assert_eq!(warnings, 0);
        let rule = rules.get("everything").unwrap();
        assert_eq!(rule.appname.as_deref(), Some("app"));
        assert_eq!(rule.msg_urgency, Some(Urgency::Low));
        assert_eq!(rule.urgency, Some(Urgency::Critical));
        assert_eq!(rule.match_transient, Some(false));
        assert_eq!(rule.timeout, Some(Timeout::After(std::time::Duration::from_millis(500))));
        assert_eq!(rule.markup, Some(MarkupMode::Full));
        assert_eq!(rule.fullscreen, Some(Fullscreen::Pushback));
        assert_eq!(rule.script, Some(PathBuf::from("/usr/bin/notify-hook")));
        assert_eq!(rule.set_stack_tag.as_deref(), Some("other"));
        assert_eq!(rule.frame_color.as_deref(), Some("#333333"));
    }

    #[test]
    fn unknown_key_is_ignored_with_warning() {
        let (rules, captured) = capture(|| build(&file("[x]\nappname = \"a\"\ncolour = \"red\"\n")));

        assert_eq!(rules.get("x").unwrap().appname.as_deref(), Some("a"));
        assert_eq!(captured.warnings().len(), 1);
    }

    #[test]
    fn empty_urgency_is_skipped_silently() {
        let (rules, warnings) = count_warnings(|| {
            build(&file("[fullscreen_show_critical]\nmsg_urgency = \"\"\nurgency = \"\"\n"))
        });
        let rule = rules.get("fullscreen_show_critical").unwrap();

        assert_eq!(rule.msg_urgency, Some(Urgency::Critical));
        assert_eq!(rule.urgency, None);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn empty_format_is_kept() {
        let rules = build(&file("[silence]\nappname = \"Spotify\"\nformat = \"\"\n"));
        assert_eq!(rules.get("silence").unwrap().format.as_deref(), Some(""));
    }
}

mod rule_set {
    use super::*;

    #[test]
    fn find_or_insert_is_idempotent() {
        let mut rules = RuleSet::new();
        rules.find_or_insert("a").body = Some("1".to_string());
        rules.find_or_insert("a").summary = Some("2".to_string());

        assert_eq!(rules.len(), 1);
        let rule = rules.get("a").unwrap();
        assert_eq!(rule.body.as_deref(), Some("1"));
        assert_eq!(rule.summary.as_deref(), Some("2"));
    }

    #[test]
    fn lookup_of_missing_rule() {
        assert!(RuleSet::with_defaults().get("nope").is_none());
    }

    #[test]
    fn serializes_as_list() {
        let mut rules = RuleSet::new();
        rules.find_or_insert("only");

        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["name"], "only");
    }
}
