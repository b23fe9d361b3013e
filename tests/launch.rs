use mvc_queues::{Config, FrontEndKind, MvcError};

#[test]
fn console_selector_builds_config() {
    let config = Config::from_args(["mvc-queues", "cmd"]).unwrap();
    assert_eq!(config.front_end, FrontEndKind::Cmd);
    assert!(config.front_end.is_available());
}

#[test]
fn unknown_selector_is_a_usage_error() {
    let err = Config::from_args(["mvc-queues", "gui"]).unwrap_err();

    assert!(err.is_usage());
    assert_eq!(
        err.to_string(),
        "Unknown ViewController interface 'gui' specified. Exiting."
    );
}

#[test]
fn missing_selector_is_a_usage_error() {
    let err = Config::from_args(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, MvcError::MissingFrontEnd));

    let err = Config::from_args(vec!["mvc-queues".to_string()]).unwrap_err();
    assert!(matches!(err, MvcError::MissingFrontEnd));
}

#[cfg(not(feature = "gui"))]
#[test]
fn hand_built_graphical_config_is_rejected_before_starting() {
    let config = Config::new(FrontEndKind::Tk);
    assert!(matches!(
        mvc_queues::launch(&config),
        Err(MvcError::FrontEndUnavailable(_))
    ));
}
