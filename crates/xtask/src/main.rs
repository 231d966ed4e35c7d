use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Allowed internal dependencies per crate. Anything not listed here is a
/// layering violation: the domain knows nothing, the wire types know only
/// the domain, the engine sits on top.
const ALLOWED: &[(&str, &[&str])] = &[
    ("realmkeeper-domain", &[]),
    ("realmkeeper-shared", &["realmkeeper-domain"]),
    (
        "realmkeeper-engine",
        &["realmkeeper-domain", "realmkeeper-shared"],
    ),
    ("xtask", &[]),
];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let packages = metadata["packages"]
        .as_array()
        .context("metadata has no packages array")?;

    let internal: Vec<&str> = ALLOWED.iter().map(|(name, _)| *name).collect();
    let mut violations = Vec::new();

    for package in packages {
        let name = package["name"].as_str().unwrap_or_default();
        let Some((_, allowed)) = ALLOWED.iter().find(|(n, _)| *n == name) else {
            continue;
        };
        for dep in package["dependencies"].as_array().into_iter().flatten() {
            let dep_name = dep["name"].as_str().unwrap_or_default();
            if internal.contains(&dep_name) && !allowed.contains(&dep_name) {
                violations.push(format!("{name} must not depend on {dep_name}"));
            }
        }
    }

    if !violations.is_empty() {
        anyhow::bail!("Architecture violations:\n  {}", violations.join("\n  "));
    }

    println!("arch-check: dependency direction OK");
    Ok(())
}
