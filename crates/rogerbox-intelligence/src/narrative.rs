// ABOUTME: Spanish presentation text for goal suggestions
// ABOUTME: Title, description, motivation and key points built from the computed plan numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RogerBox

use crate::bmi::BmiAssessment;
use crate::goal_suggestion::PlanKind;

/// Computed numbers a suggestion's text is built from
#[derive(Debug, Clone, Copy)]
pub struct PlanOutline<'a> {
    /// Selected plan
    pub kind: PlanKind,
    /// BMI and band of the profile
    pub assessment: BmiAssessment,
    /// Weight the user reported
    pub current_weight_kg: f64,
    /// Weight the plan aims for
    pub target_weight_kg: f64,
    /// Duration phrase, e.g. "12 semanas"
    pub estimated_duration: &'a str,
}

impl PlanOutline<'_> {
    /// Signed change in kilograms (negative is a loss)
    #[must_use]
    pub fn delta_kg(&self) -> f64 {
        self.target_weight_kg - self.current_weight_kg
    }

    /// Absolute change as a percentage of current weight, one decimal
    #[must_use]
    pub fn delta_percentage(&self) -> f64 {
        if self.current_weight_kg <= 0.0 || !self.current_weight_kg.is_finite() {
            return 0.0;
        }
        (self.delta_kg().abs() / self.current_weight_kg * 1000.0).round() / 10.0
    }
}

/// Kilograms without a trailing ".0" for whole values
fn kg(value: f64) -> String {
    // -0.0 would print as "-0"
    let value = if value.abs() < 1e-9 { 0.0 } else { value };
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// "bajar 7 kg", "subir 4 kg" or "mantener tu peso de 65 kg"
fn change_phrase(outline: &PlanOutline<'_>) -> String {
    let delta = outline.delta_kg();
    if delta < -0.05 {
        format!("bajar {} kg", kg(-delta))
    } else if delta > 0.05 {
        format!("subir {} kg", kg(delta))
    } else {
        format!("mantener tu peso de {} kg", kg(outline.current_weight_kg))
    }
}

/// Headline
#[must_use]
pub fn title(outline: &PlanOutline<'_>) -> String {
    let loss = kg(-outline.delta_kg());
    match outline.kind {
        PlanKind::ObesityLoss => format!("Pierde {loss} kg de forma segura"),
        PlanKind::OverweightLoss => format!("Baja {loss} kg y gana energía"),
        PlanKind::ToneOverride => "Tonifica tu cuerpo sin bajar de peso".to_owned(),
        PlanKind::GainMuscle => "Construye masa muscular".to_owned(),
        PlanKind::Tone => "Define y tonifica tu cuerpo".to_owned(),
        PlanKind::Endurance => "Mejora tu resistencia".to_owned(),
        PlanKind::Flexibility => "Gana movilidad y flexibilidad".to_owned(),
        PlanKind::Strength => "Aumenta tu fuerza".to_owned(),
        PlanKind::GenericModerate => "Activa tu metabolismo".to_owned(),
        PlanKind::GenericMaintenance => "Cuida tu bienestar".to_owned(),
    }
}

/// Explanation surfacing BMI, band, change, difficulty and duration
#[must_use]
pub fn description(outline: &PlanOutline<'_>) -> String {
    let difficulty = outline.kind.difficulty().label_es();
    let base = format!(
        "Tu IMC es {:.1} ({}). Este plan de dificultad {} dura {} y busca {}",
        outline.assessment.rounded(),
        outline.assessment.category.label_es(),
        difficulty,
        outline.estimated_duration,
        change_phrase(outline),
    );
    if outline.delta_kg().abs() > 0.05 {
        format!(
            "{base} ({:.1}% de tu peso actual) hasta llegar a {} kg.",
            outline.delta_percentage(),
            kg(outline.target_weight_kg)
        )
    } else {
        format!("{base}.")
    }
}

/// Encouragement line, personalized with the user's name when present
#[must_use]
pub fn motivation(outline: &PlanOutline<'_>, name: &str) -> String {
    let line = match outline.kind {
        PlanKind::ObesityLoss | PlanKind::OverweightLoss | PlanKind::GenericModerate => {
            "Cada semana cuenta: pequeños cambios constantes llevan a grandes resultados."
        }
        PlanKind::ToneOverride => {
            "Tu peso ya es saludable; ahora toca transformar tu composición corporal."
        }
        PlanKind::GainMuscle | PlanKind::Strength => {
            "La fuerza se construye repetición a repetición. ¡Vamos por ello!"
        }
        PlanKind::Tone | PlanKind::Endurance => {
            "La constancia es tu mejor aliada para superar tus propios límites."
        }
        PlanKind::Flexibility | PlanKind::GenericMaintenance => {
            "Moverte bien es la base de sentirte bien todos los días."
        }
    };
    let name = name.trim();
    if name.is_empty() {
        line.to_owned()
    } else {
        format!("{name}, {}", lowercase_first(line))
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Ordered tips: plan-specific advice followed by the plan numbers
#[must_use]
pub fn key_points(outline: &PlanOutline<'_>) -> Vec<String> {
    let advice: [&str; 2] = match outline.kind {
        PlanKind::ObesityLoss => [
            "Combina cardio de bajo impacto con caminatas diarias",
            "Prioriza un déficit calórico moderado y sostenible",
        ],
        PlanKind::OverweightLoss | PlanKind::GenericModerate => [
            "Entrena intervalos de alta intensidad tres veces por semana",
            "Reduce azúcares y ultraprocesados",
        ],
        PlanKind::ToneOverride | PlanKind::Tone => [
            "Trabaja con peso corporal y bandas elásticas",
            "Mantén una ingesta adecuada de proteína",
        ],
        PlanKind::GainMuscle => [
            "Aplica sobrecarga progresiva en cada sesión",
            "Asegura un superávit calórico con suficiente proteína",
        ],
        PlanKind::Endurance => [
            "Aumenta el volumen de entrenamiento de forma gradual",
            "Cuida tu hidratación antes y después de entrenar",
        ],
        PlanKind::Flexibility => [
            "Dedica diez minutos diarios a la movilidad articular",
            "Respira profundo y sostén cada estiramiento",
        ],
        PlanKind::Strength => [
            "Domina la técnica de los movimientos básicos",
            "Descansa lo suficiente entre series pesadas",
        ],
        PlanKind::GenericMaintenance => [
            "Mantén una rutina de actividad física regular",
            "Duerme entre siete y nueve horas",
        ],
    };

    let mut points: Vec<String> = advice.iter().map(|tip| (*tip).to_owned()).collect();
    points.push(format!("Meta: {} kg", kg(outline.target_weight_kg)));
    points.push(format!("Duración estimada: {}", outline.estimated_duration));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;

    fn outline(kind: PlanKind, current: f64, target: f64) -> PlanOutline<'static> {
        PlanOutline {
            kind,
            assessment: BmiAssessment {
                bmi: 31.14,
                category: BmiCategory::Obesity,
            },
            current_weight_kg: current,
            target_weight_kg: target,
            estimated_duration: "24 semanas",
        }
    }

    #[test]
    fn test_kg_never_prints_negative_zero() {
        assert_eq!(kg(-0.0), "0");
        assert_eq!(kg(-(6.0_f64 - 6.0)), "0");
        assert_eq!(kg(7.0), "7");
        assert_eq!(kg(6.5), "6.5");
    }

    #[test]
    fn test_description_surfaces_plan_numbers() {
        let text = description(&outline(PlanKind::ObesityLoss, 90.0, 83.0));
        assert!(text.contains("31.1"));
        assert!(text.contains("obesidad"));
        assert!(text.contains("bajar 7 kg"));
        assert!(text.contains("7.8%"));
        assert!(text.contains("24 semanas"));
        assert!(text.contains("exigente"));
    }

    #[test]
    fn test_maintenance_never_reads_as_loss() {
        let text = description(&outline(PlanKind::ToneOverride, 65.0, 65.0));
        assert!(text.contains("mantener"));
        assert!(!text.contains("bajar"));
    }

    #[test]
    fn test_motivation_uses_name() {
        let text = motivation(&outline(PlanKind::Strength, 70.0, 70.0), "Ana");
        assert!(text.starts_with("Ana, la fuerza"));
        let anonymous = motivation(&outline(PlanKind::Strength, 70.0, 70.0), "  ");
        assert!(anonymous.starts_with("La fuerza"));
    }

    #[test]
    fn test_key_points_end_with_plan_numbers() {
        let points = key_points(&outline(PlanKind::ObesityLoss, 90.0, 83.0));
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], "Meta: 83 kg");
        assert_eq!(points[3], "Duración estimada: 24 semanas");
    }
}
