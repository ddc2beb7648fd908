// tests/startup.rs
use std::process::Command;

#[test]
fn test_missing_secret_exits_before_serving() {
    // Fresh directory so no .env file supplies the secret.
    let workdir = std::env::temp_dir().join(format!("recaptcha-validator-startup-{}", std::process::id()));
    std::fs::create_dir_all(&workdir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_recaptcha-validator"))
        .current_dir(&workdir)
        .env_remove("RECAPTCHA_SECRET_KEY")
        .env_remove("PORT")
        .output()
        .unwrap();

    let _ = std::fs::remove_dir_all(&workdir);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RECAPTCHA_SECRET_KEY is not set"), "stderr: {}", stderr);
}
