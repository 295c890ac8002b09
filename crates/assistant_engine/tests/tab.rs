use assistant_engine::{StaticTabLocator, TabError, TabLocator};

#[tokio::test]
async fn static_locator_returns_configured_url() {
    let tabs = StaticTabLocator::new("https://active.tab");
    assert_eq!(tabs.current_url().await.unwrap(), "https://active.tab");
}

#[tokio::test]
async fn unconfigured_static_locator_is_unavailable() {
    let err = StaticTabLocator::unavailable().current_url().await.unwrap_err();
    assert_eq!(err, TabError::Unavailable);
}

#[cfg(unix)]
mod command {
    use assistant_engine::{CommandTabLocator, TabError, TabLocator};

    #[tokio::test]
    async fn first_non_empty_stdout_line_is_the_url() {
        let tabs = CommandTabLocator::new("sh", ["-c", "printf '\\n  https://from.cmd  \\nsecond\\n'"]);
        assert_eq!(tabs.current_url().await.unwrap(), "https://from.cmd");
    }

    #[tokio::test]
    async fn failing_command_is_an_error() {
        let tabs = CommandTabLocator::new("sh", ["-c", "exit 3"]);
        let err = tabs.current_url().await.unwrap_err();
        assert!(matches!(err, TabError::CommandFailed { .. }));
    }

    #[tokio::test]
    async fn silent_command_is_an_error() {
        let tabs = CommandTabLocator::new("sh", ["-c", "true"]);
        let err = tabs.current_url().await.unwrap_err();
        assert!(matches!(err, TabError::Empty { .. }));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let tabs = CommandTabLocator::new("definitely-not-a-real-program-4242", Vec::<String>::new());
        let err = tabs.current_url().await.unwrap_err();
        assert!(matches!(err, TabError::Spawn { .. }));
    }
}
