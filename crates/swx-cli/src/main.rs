use std::process::ExitCode;

use swx_io::{NamedMaterial, load_materials};
use swx_model::{WaveSpeedConfig, stable_timestep};

/// Courant number used for the printed unit-cell time-step bound.
const COURANT: f64 = 0.5;

fn usage() {
    eprintln!("usage: swx-cli wavespeeds <materials.json>");
}

fn print_material(entry: &NamedMaterial, config: &WaveSpeedConfig) {
    let material = entry.record.as_anisotropic();
    let v_max = material.max_wave_speed(config);

    println!("material: {}", entry.name);
    println!("  kind: {}", entry.record.kind());
    println!("  density: {}", material.density);
    println!("  p_wave_speed: {:.6e}", material.p_wave_speed());
    println!("  s_wave_speed: {:.6e}", material.s_wave_speed());
    println!("  max_wave_speed: {:.6e}", v_max);
    println!(
        "  stable_timestep_unit_cell: {:.6e}",
        stable_timestep(v_max, 1.0, COURANT)
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 || args[1] != "wavespeeds" {
        usage();
        return ExitCode::from(2);
    }

    let materials = match load_materials(&args[2]) {
        Ok(materials) => materials,
        Err(err) => {
            eprintln!("load error: {err}");
            return ExitCode::from(1);
        }
    };

    let config = WaveSpeedConfig::default();
    for entry in &materials {
        print_material(entry, &config);
    }
    ExitCode::SUCCESS
}
