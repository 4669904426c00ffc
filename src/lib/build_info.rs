pub fn git_commit_hash() -> &'static str {
    match option_env!("LOGIN_WIZARD_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
