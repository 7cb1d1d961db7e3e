use std::env;
use std::fs;
use std::path::Path;

/// Кладёт config.toml и migrations/ из корня workspace рядом с бинарником
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../migrations");

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    let source_migrations = workspace_root.join("migrations");
    if source_migrations.is_dir() {
        let dest_migrations = target_dir.join("migrations");
        fs::create_dir_all(&dest_migrations)
            .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest_migrations, e));
        for entry in fs::read_dir(&source_migrations).expect("Failed to read migrations") {
            let path = entry.expect("Failed to read migration entry").path();
            if path.extension().and_then(|e| e.to_str()) == Some("sql") {
                let file_name = path.file_name().expect("migration file name");
                fs::copy(&path, dest_migrations.join(file_name))
                    .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
            }
        }
    }
}
