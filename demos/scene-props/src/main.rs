//! Demo: register a realistic set of scene property names and print the
//! identifier each one resolves to.
//!
//! This shows the two ways consumers use the scheme:
//! 1. Compile-time constants via `sids!` (with collision checking)
//! 2. Runtime registration via `SidRegistry` (with reverse lookup)

use strid::{Sid, SidRegistry};

strid::sids! {
    /// Diffuse albedo of a material.
    pub MAT_DIFFUSE = "mat.diffuse",
    /// Specular reflectance of a material.
    pub MAT_SPECULAR = "mat.specular",
    /// Light source brightness.
    pub LAMP_INTENSITY = "lamp.intensity",
    /// Light source color.
    pub LAMP_COLOR = "lamp.color",
}

fn main() {
    // The constants above were hashed at compile time; the registry hashes at
    // runtime. Both sides of the scheme always agree.
    let names = [
        "mat.diffuse",
        "mat.specular",
        "mat.roughness",
        "lamp.intensity",
        "lamp.color",
        "lamp.castShadows",
        "shader.albedo",
        "shader.worldPos",
    ];

    let mut registry = SidRegistry::new();
    println!("{:<20} identifier", "name");
    for name in names {
        match registry.register(name) {
            Ok(id) => println!("{:<20} {}", name, id),
            Err(err) => eprintln!("{:<20} REJECTED: {}", name, err),
        }
    }

    assert_eq!(registry.resolve(MAT_DIFFUSE), Some("mat.diffuse"));
    assert_eq!(LAMP_INTENSITY, Sid::of("lamp.intensity"));
    println!("\n{} names registered, no collisions", registry.len());
}
