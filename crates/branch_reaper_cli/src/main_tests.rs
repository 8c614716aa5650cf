use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("argument parsing failed")
}

#[test]
fn test_defaults_are_a_dry_run_against_gitlab_com() {
    let cli = parse(&["branch-reaper", "--project", "42", "--token", "glpat-x"]);

    assert_eq!(cli.gitlab_url, gitlab_client::DEFAULT_BASE_URL);
    assert_eq!(cli.main_branch, "main");
    assert_eq!(cli.stale_days, 90);
    assert!(!cli.execute);
    assert!(!cli.yes);
    assert!(!cli.json);
}

#[test]
fn test_invocation_requires_a_project() {
    let cli = parse(&["branch-reaper", "--token", "glpat-x"]);

    let result = Invocation::from_cli(cli);

    assert!(matches!(result, Err(Error::MissingProject)));
}

#[test]
fn test_invocation_requires_a_token() {
    let mut cli = parse(&["branch-reaper", "--project", "42"]);
    // The parser may have picked up GITLAB_TOKEN from the environment.
    cli.token = None;

    let result = Invocation::from_cli(cli);

    assert!(matches!(result, Err(Error::MissingToken)));
}

#[test]
fn test_invocation_rejects_blank_token() {
    let mut cli = parse(&["branch-reaper", "--project", "42"]);
    cli.token = Some("   ".to_string());

    let result = Invocation::from_cli(cli);

    assert!(matches!(result, Err(Error::MissingToken)));
}

#[test]
fn test_invocation_rejects_zero_stale_days() {
    let cli = parse(&[
        "branch-reaper",
        "--project",
        "42",
        "--token",
        "glpat-x",
        "--stale-days",
        "0",
    ]);

    let result = Invocation::from_cli(cli);

    match result {
        Err(Error::InvalidArguments(message)) => assert!(message.contains("at least one day")),
        other => panic!("expected InvalidArguments, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_execute_flag_turns_off_dry_run() {
    let cli = parse(&[
        "branch-reaper",
        "--project",
        "42",
        "--token",
        "glpat-x",
        "--execute",
    ]);

    let invocation = Invocation::from_cli(cli).expect("invocation rejected");

    assert!(!invocation.config.dry_run());
}

#[test]
fn test_exclusions_merge_across_flags_and_commas() {
    let cli = parse(&[
        "branch-reaper",
        "--project",
        "42",
        "--token",
        "glpat-x",
        "--exclude",
        "keep-one, keep-two",
        "--exclude",
        "keep-three",
    ]);

    let invocation = Invocation::from_cli(cli).expect("invocation rejected");

    assert!(invocation.config.is_excluded("keep-one"));
    assert!(invocation.config.is_excluded("keep-two"));
    assert!(invocation.config.is_excluded("keep-three"));
    assert!(!invocation.config.is_excluded("drop-me"));
}

#[test]
fn test_confirm_deletion_accepts_yes_answers() {
    for answer in ["y", "Y", "yes", "YES"] {
        let ask = move |_request: &str| Ok(answer.to_string());
        assert!(confirm_deletion(3, &ask).expect("prompt failed"));
    }
}

#[test]
fn test_confirm_deletion_defaults_to_no() {
    for answer in ["", "n", "no", "sure?"] {
        let ask = move |_request: &str| Ok(answer.to_string());
        assert!(!confirm_deletion(3, &ask).expect("prompt failed"));
    }
}

#[test]
fn test_confirm_deletion_mentions_the_count() {
    let ask = |request: &str| {
        assert!(request.contains("3 branches"));
        Ok("n".to_string())
    };

    let _ = confirm_deletion(3, &ask);
}

#[test]
fn test_confirm_deletion_propagates_prompt_errors() {
    let ask = |_request: &str| Err(Error::StdInReadFailed);

    assert!(confirm_deletion(3, &ask).is_err());
}
