use super::{load_settings_from, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("valentine_config_test_{name}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("valentine.toml");
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn missing_file_and_empty_env_give_defaults() {
    let settings =
        load_settings_from(Path::new("/nonexistent/valentine.toml"), env_of(&[])).expect("load");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.copy().headline, "Lucia, will you be my Valentine?");
}

#[test]
fn file_values_are_overridden_by_env() {
    let path = temp_file(
        "override",
        "recipient = \"Ada\"\nsignature = \"Yours, B\"\nseed = 7\nhaptics = false\n",
    );

    let from_file = load_settings_from(&path, env_of(&[])).expect("load");
    assert_eq!(from_file.recipient, "Ada");
    assert_eq!(from_file.seed, Some(7));
    assert!(!from_file.haptics);
    assert_eq!(from_file.copy().letter_signature, "Yours, B");

    let overridden = load_settings_from(
        &path,
        env_of(&[
            ("VALENTINE_RECIPIENT", "Grace"),
            ("APP__RECIPIENT", "Hedy"),
            ("APP__SEED", " 42 "),
            ("APP__HAPTICS", "on"),
        ]),
    )
    .expect("load");
    assert_eq!(overridden.recipient, "Hedy");
    assert_eq!(overridden.seed, Some(42));
    assert!(overridden.haptics);
    assert_eq!(overridden.copy().letter_salutation, "Dearest Hedy,");

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn malformed_values_are_reported() {
    let path = temp_file("malformed", "seed = \"soon\"\n");
    let err = load_settings_from(&path, env_of(&[])).expect_err("bad file");
    assert!(err.to_string().contains("failed to parse"));
    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");

    let missing = Path::new("/nonexistent/valentine.toml");
    assert!(load_settings_from(missing, env_of(&[("APP__SEED", "x")])).is_err());
    assert!(load_settings_from(missing, env_of(&[("APP__HAPTICS", "maybe")])).is_err());
}

#[test]
fn blank_recipient_falls_back_to_default() {
    let settings = load_settings_from(
        Path::new("/nonexistent/valentine.toml"),
        env_of(&[("APP__RECIPIENT", "   ")]),
    )
    .expect("load");
    assert_eq!(settings.recipient, "Lucia");
}
