use clap::Parser;
use lessondesk::cli::args::{Args, Command, TagTarget};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["lessondesk", "lessons.json"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_lessons_command_when_parsing_then_defaults_to_first_page() {
    // Arrange
    let args = vec!["lessondesk", "lessons", "lessons.json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Lessons {
            snapshot,
            search,
            page,
            json,
            ..
        } => {
            assert_eq!(snapshot, PathBuf::from("lessons.json"));
            assert_eq!(search, None);
            assert_eq!(page, 1);
            assert!(!json);
        }
        _ => panic!("Expected Lessons command"),
    }
    assert_eq!(parsed.config, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_filters_when_parsing_practice_then_all_captured() {
    // Arrange
    let args = vec![
        "lessondesk",
        "practice",
        "questions.json",
        "--search",
        "feet",
        "--standard",
        "K2",
        "--course",
        "Geometry",
        "-p",
        "3",
        "--json",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Practice {
            search,
            standard,
            course,
            page,
            json,
            ..
        } => {
            assert_eq!(search.as_deref(), Some("feet"));
            assert_eq!(standard.as_deref(), Some("K2"));
            assert_eq!(course.as_deref(), Some("Geometry"));
            assert_eq!(page, 3);
            assert!(json);
        }
        _ => panic!("Expected Practice command"),
    }
}

#[test]
fn given_question_bank_with_search_when_parsing_then_fails() {
    // Arrange
    let args = vec!["lessondesk", "questions", "q.json", "--search", "feet"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_global_config_and_verbosity_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "lessondesk",
        "tags",
        "geo, alg",
        "-c",
        "/tmp/lessondesk.toml",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/lessondesk.toml")));
    assert_eq!(parsed.verbose, 2);
    match parsed.command {
        Command::Tags {
            existing,
            target,
            input,
        } => {
            assert_eq!(existing, None);
            assert_eq!(target, TagTarget::Lesson);
            assert_eq!(input, "geo, alg");
        }
        _ => panic!("Expected Tags command"),
    }
}

#[test]
fn given_question_target_when_parsing_tags_then_selects_question_limits() {
    // Arrange
    let args = vec!["lessondesk", "tags", "units", "--for", "question"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Tags { target, .. } => assert_eq!(target, TagTarget::Question),
        _ => panic!("Expected Tags command"),
    }
}

#[test]
fn given_preview_command_when_parsing_then_reads_id_and_flags() {
    // Arrange
    let args = vec![
        "lessondesk",
        "preview",
        "questions.json",
        "42",
        "--out",
        "q.html",
        "--open",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Preview {
            question_id,
            out,
            open,
            ..
        } => {
            assert_eq!(question_id, 42);
            assert_eq!(out, Some(PathBuf::from("q.html")));
            assert!(open);
        }
        _ => panic!("Expected Preview command"),
    }
}

#[test]
fn given_non_numeric_question_id_when_parsing_then_fails() {
    // Arrange
    let args = vec!["lessondesk", "preview", "questions.json", "abc"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}
