//! # Substrata CLI
//!
//! Terminal demo for the Terzaghi bearing capacity calculation.
//! Prompts for each parameter with defaults forming the worked example
//! (c=25 kPa, phi=20 deg, gamma=18 kN/m³, B=2 m, Df=1.5 m), then prints
//! the factors, the term breakdown, and the ultimate bearing capacity.

use std::io::{self, BufRead, Write};

use geo_core::calculations::bearing::{calculate, TerzaghiInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Substrata CLI - Terzaghi Bearing Capacity");
    println!("=========================================");
    println!();

    let cohesion_kpa = prompt_f64("Enter cohesion c (kPa) [25.0]: ", 25.0);
    let friction_angle_deg = prompt_f64("Enter friction angle phi (deg) [20.0]: ", 20.0);
    let unit_weight_kn_m3 = prompt_f64("Enter unit weight gamma (kN/m3) [18.0]: ", 18.0);
    let footing_width_m = prompt_f64("Enter footing width B (m) [2.0]: ", 2.0);
    let foundation_depth_m = prompt_f64("Enter foundation depth Df (m) [1.5]: ", 1.5);

    let input = TerzaghiInput {
        label: "CLI-Demo".to_string(),
        cohesion_kpa,
        friction_angle_deg,
        unit_weight_kn_m3,
        footing_width_m,
        foundation_depth_m,
        overburden_kpa: None,
    };

    println!();

    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BEARING CAPACITY RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Cohesion: {} kPa", input.cohesion_kpa);
            println!("  Friction angle: {}°", input.friction_angle_deg);
            println!("  Unit weight: {} kN/m³", input.unit_weight_kn_m3);
            println!("  Footing width: {} m", input.footing_width_m);
            println!("  Foundation depth: {} m", input.foundation_depth_m);
            println!("  Overburden: {:.2} kPa (gamma·Df)", result.overburden_kpa);
            println!();
            println!("Bearing capacity factors:");
            println!("  Nc = {:.2}", result.factors.n_c);
            println!("  Nq = {:.2}", result.factors.n_q);
            println!("  Nγ = {:.2}", result.factors.n_gamma);
            println!();
            println!("Terms:");
            println!("  Cohesion:    {:.2} kPa", result.cohesion_term_kpa);
            println!("  Surcharge:   {:.2} kPa", result.surcharge_term_kpa);
            println!("  Self-weight: {:.2} kPa", result.self_weight_term_kpa);
            println!();
            println!("═══════════════════════════════════════");
            println!("Ultimate bearing capacity: {:.2} kPa", result.q_ult_kpa);
            println!("(governing term: {})", result.governing_term());
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
