/// Simple example demonstrating how to use the line scanner library

use anyhow::Result;
use lineawk::{scan_file, ScanRule};
use regex::Captures;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    // Path to file for scanning
    let file_path = "demos/sample_output.txt";

    // Create sample file
    std::fs::write(
        file_path,
        r#"Simulation summary follows:
 POTCAR:    PAW_PBE Si 05Jan2001
 POTCAR:    PAW_PBE O 08Apr2002
  free  energy   TOTEN  =       -53.26186941 eV
"#,
    )?;

    println!("Scanning file: {}", file_path);

    let mut species: Vec<String> = Vec::new();
    let mut energies: Vec<f64> = Vec::new();

    // A rule with a transform: the handler sees the stripped capture
    let potcar = ScanRule::with_transform(
        r"POTCAR:(.*)",
        |_index, caps: &Captures| caps[1].trim().to_string(),
        |_index, value| species.push(value),
    )?;

    // A raw rule: the handler works on the captures directly
    let toten = ScanRule::new(r"TOTEN\s*=\s*([-.\d]+)", |_index, caps: &Captures| {
        if let Ok(energy) = caps[1].parse::<f64>() {
            energies.push(energy);
        }
    })?;

    // Scan the file with both rules
    let stats = scan_file(Path::new(file_path), vec![potcar, toten])?;

    // Display results
    println!("\nScanned {} lines, {} matches", stats.lines, stats.matches);

    println!("\nSpecies ({} found):", species.len());
    for entry in &species {
        println!("  - {}", entry);
    }

    println!("\nFinal energies:");
    for energy in &energies {
        println!("  - {} eV", energy);
    }

    Ok(())
}
