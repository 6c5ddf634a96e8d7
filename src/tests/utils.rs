use std::env;

use crate::config::ConfigError;
use crate::utils::env::{get_optional_environment_variable, parse_environment_variable};

#[test]
fn blank_variables_are_absent() {
    env::set_var("FIFO_QUEUE_SERVICE_TEST_BLANK", "   ");
    assert_eq!(get_optional_environment_variable("FIFO_QUEUE_SERVICE_TEST_BLANK"), None);
    assert_eq!(get_optional_environment_variable("FIFO_QUEUE_SERVICE_TEST_UNSET"), None);
}

#[test]
fn parses_numeric_variables() {
    assert_eq!(parse_environment_variable("FIFO_QUEUE_SERVICE_TEST_UNSET", 3).unwrap(), 3);

    env::set_var("FIFO_QUEUE_SERVICE_TEST_NUMBER", " 7 ");
    assert_eq!(parse_environment_variable("FIFO_QUEUE_SERVICE_TEST_NUMBER", 3).unwrap(), 7);

    env::set_var("FIFO_QUEUE_SERVICE_TEST_NOT_A_NUMBER", "seven");
    let err = parse_environment_variable::<u16>("FIFO_QUEUE_SERVICE_TEST_NOT_A_NUMBER", 3000).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { name: "FIFO_QUEUE_SERVICE_TEST_NOT_A_NUMBER", .. }));
    assert_eq!(err.to_string(), "FIFO_QUEUE_SERVICE_TEST_NOT_A_NUMBER has an invalid value: seven");
}
