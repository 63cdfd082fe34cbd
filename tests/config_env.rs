// Kept in its own test binary: it mutates the process environment.

use std::env;
use std::io::Write;

use object_basics::config::{TourConfig, CONFIG_ENV};
use object_basics::Lesson;
use tempfile::NamedTempFile;

#[test]
fn test_env_path_then_cli_override() {
    let mut from_env = NamedTempFile::new().unwrap();
    writeln!(from_env, "lessons = [\"namespaces\"]").unwrap();
    writeln!(from_env, "color = false").unwrap();

    let mut from_cli = NamedTempFile::new().unwrap();
    writeln!(from_cli, "lessons = [\"lifecycle\"]").unwrap();

    env::set_var(CONFIG_ENV, from_env.path());

    let config = TourConfig::resolve(None).unwrap();
    assert_eq!(config.lessons, vec![Lesson::Namespaces]);
    assert!(!config.color);

    let config = TourConfig::resolve(Some(from_cli.path().to_path_buf())).unwrap();
    assert_eq!(config.lessons, vec![Lesson::Lifecycle]);
    assert!(config.color);

    env::remove_var(CONFIG_ENV);

    assert_eq!(TourConfig::resolve(None).unwrap(), TourConfig::default());
}
