//! The `quizforge validate` command: parse and lint catalog files.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizforge_core::catalog::{load_catalog_directory, parse_catalog, validate_catalog, Catalog};

pub fn execute(path: PathBuf) -> Result<()> {
    let catalogs = if path.is_dir() {
        load_catalog_directory(&path)?
    } else {
        vec![parse_catalog(&path)?]
    };
    anyhow::ensure!(
        !catalogs.is_empty(),
        "no catalogs found under {}",
        path.display()
    );

    let mut table = Table::new();
    table.set_header(vec!["Catalog", "Questions", "Warnings"]);

    let mut total_warnings = 0usize;
    for catalog in &catalogs {
        let warnings = validate_catalog(catalog);
        total_warnings += warnings.len();

        table.add_row(vec![
            catalog.id.clone(),
            catalog.questions.len().to_string(),
            warnings.len().to_string(),
        ]);
        print_warnings(catalog, &warnings);
    }

    println!("{table}");

    if total_warnings > 0 {
        anyhow::bail!("{total_warnings} validation warning(s) found");
    }
    println!("All catalogs valid.");
    Ok(())
}

fn print_warnings(catalog: &Catalog, warnings: &[quizforge_core::catalog::ValidationWarning]) {
    for warning in warnings {
        match &warning.question_id {
            Some(id) => eprintln!("{}: [{}] {}", catalog.id, id, warning.message),
            None => eprintln!("{}: {}", catalog.id, warning.message),
        }
    }
}
