//! # LTB CLI Application
//!
//! Terminal front end for the W-shape Lr calculator: search the shape table,
//! pick a designation and a steel grade, and print the result.
//!
//! ```text
//! ltb_cli [--settings <file.json>] [table.csv]
//! ```
//!
//! Set `RUST_LOG=debug` to see table parsing and calculation details.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use ltb_core::calculations::ltb::calculate;
use ltb_core::errors::CalcError;
use ltb_core::materials::{lookup_grade, resolve_yield_strength, SteelGrade, STEEL_GRADES};
use ltb_core::report::{LtbReport, ShapeReport};
use ltb_core::settings::{load_settings, CalculatorSettings};
use ltb_core::{get_shape, search_shapes, ShapeTable};

#[derive(Parser, Debug)]
#[command(name = "ltb_cli")]
#[command(about = "Look up a W-shape and compute its limiting unbraced length Lr")]
struct Args {
    /// Calculator settings file (JSON)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Shape table (CSV); overrides the settings file and the built-in table
    table: Option<PathBuf>,
}

/// Read one trimmed line; `None` on EOF or I/O error.
fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn choose_designation(table: &ShapeTable) -> Option<String> {
    loop {
        let query = prompt("Search shapes (e.g. W14): ")?;
        let suggestions = search_shapes(table, &query);
        if suggestions.is_empty() {
            println!("  No matching shapes.");
            continue;
        }
        for (i, designation) in suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, designation);
        }

        let choice = prompt("Select number or type a designation: ")?;
        let designation = match choice.parse::<usize>() {
            Ok(n) if (1..=suggestions.len()).contains(&n) => suggestions[n - 1].clone(),
            _ if choice.is_empty() => continue,
            _ => choice,
        };
        return Some(designation);
    }
}

fn choose_grade(default: SteelGrade) -> Option<SteelGrade> {
    println!();
    println!("Steel grades:");
    for grade in STEEL_GRADES.iter() {
        println!("  {}", grade);
    }
    loop {
        let name = prompt(&format!("Grade [{}]: ", default.name))?;
        if name.is_empty() {
            return Some(default);
        }
        match lookup_grade(&name) {
            Ok(grade) => return Some(grade),
            Err(e) => println!("  {}", e),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                print_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => CalculatorSettings::default(),
    };
    if args.table.is_some() {
        settings.table_path = args.table;
    }
    debug!("Settings: {:?}", settings);

    let table = match settings.table() {
        Ok(table) => table,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let default = match settings.grade() {
        Ok(grade) => grade,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    println!("W-Shape Lateral-Torsional Buckling Calculator");
    println!("=============================================");
    println!("{} shapes loaded", table.len());
    println!();

    let Some(designation) = choose_designation(&table) else {
        return ExitCode::SUCCESS;
    };
    let shape = match get_shape(&table, &designation) {
        Ok(shape) => shape,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let Some(grade) = choose_grade(default) else {
        return ExitCode::SUCCESS;
    };
    let custom = prompt("Custom Fy in ksi (blank to use the grade): ").unwrap_or_default();
    let fy = match resolve_yield_strength(grade, &custom) {
        Ok(fy) => fy,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    debug!("Using {} for {}", fy.label(), shape.designation);

    println!();
    print!("{}", ShapeReport::new(shape));
    println!();

    match calculate(shape, settings.elastic_modulus_ksi, fy.fy_ksi()) {
        Ok(result) => {
            print!("{}", LtbReport::new(&shape.designation, &result).with_material(fy.label()));

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
