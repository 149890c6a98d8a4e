// ABOUTME: Catalog commands listing courses and verifying recommendation coverage
// ABOUTME: Verification failure exits non-zero with the missing course slugs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::helpers::display::display_course_table;
use anyhow::Result;
use rogerbox::catalog::CourseCatalog;

/// Print the standard catalog
pub fn list(json: bool) -> Result<()> {
    let catalog = CourseCatalog::standard();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.list())?);
    } else {
        display_course_table(&catalog.list());
    }
    Ok(())
}

/// Fail when the engine could recommend a course the catalog does not sell
pub fn verify() -> Result<()> {
    let catalog = CourseCatalog::standard();
    catalog.verify_recommendations()?;
    println!(
        "Catalog OK: {} courses, every recommendable course is on sale",
        catalog.len()
    );
    Ok(())
}
