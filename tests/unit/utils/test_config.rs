use mydex_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_STRING", "test_value");
    }
    let result: String = get_env_or_default("MYDEX_TEST_VAR_STRING", "default".to_string());
    assert_eq!(result, "test_value");
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("MYDEX_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("MYDEX_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_trims_and_parses() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_INT", " 42 ");
    }
    let result: u64 = get_env_or_default("MYDEX_TEST_VAR_INT", 0);
    assert_eq!(result, 42);
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_INVALID", "not_a_number");
    }
    let result: u64 = get_env_or_default("MYDEX_TEST_VAR_INVALID", 20);
    assert_eq!(result, 20);
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_OPTION", "123");
    }
    let result: Option<i32> = get_env_or_none("MYDEX_TEST_VAR_OPTION");
    assert_eq!(result, Some(123));
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_empty_var() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_EMPTY", "   ");
    }
    let result: Option<String> = get_env_or_none("MYDEX_TEST_VAR_EMPTY");
    assert_eq!(result, None);
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none_with_invalid_parse() {
    unsafe {
        env::set_var("MYDEX_TEST_VAR_INVALID_OPTION", "not_a_number");
    }
    let result: Option<i32> = get_env_or_none("MYDEX_TEST_VAR_INVALID_OPTION");
    assert_eq!(result, None);
    unsafe {
        env::remove_var("MYDEX_TEST_VAR_INVALID_OPTION");
    }
}
