// Man page generator for somnoplot
// Usage: generate-man [OUTPUT_PATH]

use clap::CommandFactory;
use clap_mangen::Man;
use somnoplot::cli::commands::Cli;

fn main() -> std::io::Result<()> {
    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "somnoplot.1".to_string());

    let cmd = Cli::command();
    let man = Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    std::fs::write(&out_path, buffer)?;
    eprintln!("Wrote {}", out_path);
    Ok(())
}
