//! Basic usage of the capitalization API

use capitalize_core::{capitalize, Capitalizer, Options, RuleConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with the built-in rules
    println!("=== Method 1: Convenience Function ===");
    for name in ["jonnas fonini", "joão DA Silva", "dom JOÃO vi", "EDDIE VAN HALEN"] {
        println!("  {name:<20} -> {}", capitalize(name));
    }

    // Method 2: Per-call options
    println!("\n=== Method 2: Per-call Options ===");
    let capitalizer = Capitalizer::new();
    let options = Options::new().exception("of").surname("McElroy");
    for name in ["gørvel fadersdotter of giske", "john mcelroy"] {
        println!("  {name:<30} -> {}", capitalizer.capitalize_with(name, &options));
    }

    // Method 3: Builder with custom base rules
    println!("\n=== Method 3: Builder ===");
    let capitalizer = Capitalizer::builder()
        .exceptions(["af", "zu"])
        .surname("MacDonald")
        .build()?;
    println!(
        "  {}",
        capitalizer.capitalize("BREDO VON MUNTHE AF MORGENSTIERNE")
    );

    // Method 4: Rule file
    println!("\n=== Method 4: Rule File ===");
    let config = RuleConfig::from_toml_str(
        r#"
[metadata]
name = "Arabic patronymics"

[exceptions]
words = ["bin", "ibn"]
"#,
    )?;
    let capitalizer = Capitalizer::from_config(&config)?;
    println!("  {}", capitalizer.capitalize("AHMAD IBN HANBAL"));

    Ok(())
}
