use std::io::Read;

use miette::*;

use aoc2025_day_9::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = read_input()?;
    let result = part1::process(&input)?;
    println!("Part 1: {}", result);
    Ok(())
}

/// Reads the file named by the first argument, or stdin when there is none.
fn read_input() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {path}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            Ok(input)
        }
    }
}
