// ABOUTME: Output formatting helpers for rogerbox-cli
// ABOUTME: Human-readable rendering of suggestions and the course table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use rogerbox::models::{Course, GoalSuggestion};
use rogerbox_intelligence::BmiAssessment;

/// Render a suggestion with the BMI it came from
pub fn display_suggestion(assessment: &BmiAssessment, suggestion: &GoalSuggestion) {
    println!("\n{}", suggestion.title);
    println!("{}", "=".repeat(60));
    println!(
        "IMC: {:.1} ({})",
        assessment.rounded(),
        assessment.category.label_es()
    );
    println!("Peso objetivo: {:.1} kg", suggestion.target_weight);
    println!("Fecha límite: {}", suggestion.deadline.format("%Y-%m-%d"));
    println!(
        "Dificultad: {} | Duración: {}",
        suggestion.difficulty.label_es(),
        suggestion.estimated_duration
    );
    println!("Curso recomendado: {}", suggestion.recommended_course);
    println!("\n{}", suggestion.description);
    println!("\n{}", suggestion.motivation);
    println!();
    for point in &suggestion.key_points {
        println!("  - {point}");
    }
}

/// Render the catalog as an aligned table
pub fn display_course_table(courses: &[&Course]) {
    println!(
        "{:<26} {:<28} {:<8} {:>10} {:>8}",
        "ID", "TÍTULO", "NIVEL", "PRECIO", "LECCIONES"
    );
    println!("{}", "-".repeat(84));
    for course in courses {
        println!(
            "{:<26} {:<28} {:<8} {:>10} {:>8}",
            course.id.slug(),
            course.title,
            course.difficulty.to_string(),
            course.price_cop,
            course.lesson_count
        );
    }
}
