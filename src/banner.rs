// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
                          _       _
  _ __ ___  ___ __ _ _ __ | |_ ___| |__   __ _
 | '__/ _ \/ __/ _` | '_ \| __/ __| '_ \ / _` |
 | | |  __/ (_| (_| | |_) | || (__| | | | (_| |
 |_|  \___|\___\__,_| .__/ \__\___|_| |_|\__,_|
                    |_|

    reCAPTCHA Token Validation Service
"#;
    println!("{}", banner);
}

/// Lists the endpoints and the environment the server expects.
pub fn print_server_info(port: u16) {
    println!("🚀 Server listening on port {}", port);
    println!("Available endpoints:");
    println!("- GET  /                   - Check service status");
    println!("- GET  /health             - Check service status");
    println!("- POST /validate-recaptcha - Validate a reCAPTCHA token");
    println!();
    println!("Environment variables:");
    println!("- RECAPTCHA_SECRET_KEY: reCAPTCHA secret key (required)");
    println!("- PORT: server port (optional, default: {})", crate::config::DEFAULT_PORT);
}
