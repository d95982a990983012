//! Plain console output helpers for the demo flows.

pub fn header(text: &str) {
    println!();
    println!("{}", "=".repeat(80));
    println!("{text}");
    println!("{}", "=".repeat(80));
    println!();
}

pub fn subheader(text: &str) {
    println!();
    println!("{}", "-".repeat(80));
    println!("{text}");
    println!("{}", "-".repeat(80));
}

pub fn info(text: &str) {
    println!("ℹ {text}");
}

pub fn success(text: &str) {
    println!("✓ {text}");
}

pub fn warning(text: &str) {
    println!("⚠ {text}");
}

pub fn error(text: &str) {
    println!("✗ {text}");
}
