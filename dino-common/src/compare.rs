//! Comparison engine
//!
//! Appends human-relative facts to each dino. Every call appends exactly
//! one fact and never touches the facts already present, so repeated runs
//! accumulate (nothing resets a dino's list between runs).

use std::cmp::Ordering;

use crate::model::{Dino, Human};

/// Message appended when the name comparison finds no ordering
pub const SAME_NAME: &str = "Same name weight!";
pub const SAME_HEIGHT: &str = "Same height.";
pub const SAME_WEIGHT: &str = "Same weight";

/// Run all three comparisons against `human`, in order: name, height, weight.
///
/// Each dino's fact list grows by exactly 3.
pub fn compare_all(dinos: &mut [Dino], human: &Human) {
    for dino in dinos.iter_mut() {
        // Dinos carry no name of their own; the absent value orders neither
        // before nor after the human's name.
        compare_name(dino, None, &human.name);
        compare_height(dino, human);
        compare_weight(dino, human);
    }
}

/// Append the alphabetical comparison of `dino_name` against `human_name`.
pub fn compare_name(dino: &mut Dino, dino_name: Option<&str>, human_name: &str) {
    let fact = name_fact(dino_name, human_name);
    dino.facts.push(fact);
}

fn name_fact(dino_name: Option<&str>, human_name: &str) -> String {
    let Some(dino_name) = dino_name else {
        return SAME_NAME.to_string();
    };

    match dino_name.cmp(human_name) {
        Ordering::Greater => format!(
            "Based on alphabetical {} comes before {}!",
            human_name, dino_name
        ),
        Ordering::Less => format!(
            "Based on alphabetical {} comes before {}!",
            dino_name, human_name
        ),
        Ordering::Equal => SAME_NAME.to_string(),
    }
}

/// Append the height comparison (inches).
pub fn compare_height(dino: &mut Dino, human: &Human) {
    let fact = measure_fact(
        dino.animal.height,
        human.animal.height,
        "inches",
        &dino.animal.species,
        &human.name,
        SAME_HEIGHT,
    );
    dino.facts.push(fact);
}

/// Append the weight comparison (lbs).
pub fn compare_weight(dino: &mut Dino, human: &Human) {
    let fact = measure_fact(
        dino.animal.weight,
        human.animal.weight,
        "lbs",
        &dino.animal.species,
        &human.name,
        SAME_WEIGHT,
    );
    dino.facts.push(fact);
}

/// NaN on either side compares as neither bigger nor smaller and falls
/// through to the `same` message.
fn measure_fact(
    dino_value: f64,
    human_value: f64,
    unit: &str,
    species: &str,
    human_name: &str,
    same: &str,
) -> String {
    match dino_value.partial_cmp(&human_value) {
        Some(Ordering::Greater) => format!(
            "{} {} for {} is bigger than {} {} for {}",
            format_number(dino_value),
            unit,
            species,
            format_number(human_value),
            unit,
            human_name
        ),
        Some(Ordering::Less) => format!(
            "{} {} for {} is bigger than {} {} for {}",
            format_number(human_value),
            unit,
            human_name,
            format_number(dino_value),
            unit,
            species
        ),
        Some(Ordering::Equal) | None => same.to_string(),
    }
}

/// Numbers print the way a browser stringifies them: integral values
/// without a fractional part (`60`, not `60.0`), `-0` as `0`, and
/// exponent form outside `[1e-6, 1e21)` (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp_form = format!("{:e}", value);
    match exp_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::finalize_facts;

    fn rex(height: f64, weight: f64) -> Dino {
        let mut dino = Dino::new("Rex", weight, height, "carnivor", "North America", "Late Cretaceous", "Big.");
        finalize_facts(&mut dino);
        dino
    }

    fn sam(height: f64, weight: f64) -> Human {
        Human::new("Sam", weight, height)
    }

    #[test]
    fn test_human_taller_puts_human_first() {
        let mut dino = rex(60.0, 100.0);
        compare_height(&mut dino, &sam(70.0, 150.0));
        assert_eq!(
            dino.facts.last().map(String::as_str),
            Some("70 inches for Sam is bigger than 60 inches for Rex")
        );
    }

    #[test]
    fn test_dino_taller_puts_dino_first() {
        let mut dino = rex(144.0, 100.0);
        compare_height(&mut dino, &sam(68.0, 150.0));
        assert_eq!(
            dino.facts.last().map(String::as_str),
            Some("144 inches for Rex is bigger than 68 inches for Sam")
        );
    }

    #[test]
    fn test_equal_height_and_weight() {
        let mut dino = rex(68.0, 150.0);
        let human = sam(68.0, 150.0);
        compare_height(&mut dino, &human);
        compare_weight(&mut dino, &human);
        assert_eq!(&dino.facts[dino.facts.len() - 2..], [SAME_HEIGHT, SAME_WEIGHT]);
    }

    #[test]
    fn test_weight_uses_lbs() {
        let mut dino = rex(60.0, 11905.0);
        compare_weight(&mut dino, &sam(70.0, 150.5));
        assert_eq!(
            dino.facts.last().map(String::as_str),
            Some("11905 lbs for Rex is bigger than 150.5 lbs for Sam")
        );
    }

    #[test]
    fn test_nan_compares_as_same() {
        let mut dino = rex(60.0, 100.0);
        let human = sam(f64::NAN, f64::NAN);
        compare_height(&mut dino, &human);
        compare_weight(&mut dino, &human);
        assert_eq!(&dino.facts[dino.facts.len() - 2..], [SAME_HEIGHT, SAME_WEIGHT]);
    }

    #[test]
    fn test_name_fact_orders_lesser_first() {
        assert_eq!(name_fact(Some("Zed"), "Sam"), "Based on alphabetical Sam comes before Zed!");
        assert_eq!(name_fact(Some("Abe"), "Sam"), "Based on alphabetical Abe comes before Sam!");
        assert_eq!(name_fact(Some("Sam"), "Sam"), SAME_NAME);
        assert_eq!(name_fact(None, "Sam"), SAME_NAME);
    }

    #[test]
    fn test_compare_all_appends_three_in_order() {
        let mut dinos = vec![rex(60.0, 100.0), rex(200.0, 9000.0)];
        let before: Vec<usize> = dinos.iter().map(|d| d.facts.len()).collect();
        let prior = dinos[0].facts.clone();

        compare_all(&mut dinos, &sam(70.0, 150.0));

        for (dino, len) in dinos.iter().zip(before) {
            assert_eq!(dino.facts.len(), len + 3);
        }
        assert_eq!(&dinos[0].facts[..prior.len()], prior.as_slice());
        assert_eq!(dinos[0].facts[4], SAME_NAME);
        assert_eq!(dinos[0].facts[5], "70 inches for Sam is bigger than 60 inches for Rex");
        assert_eq!(dinos[0].facts[6], "150 lbs for Sam is bigger than 100 lbs for Rex");
    }

    #[test]
    fn test_repeated_runs_accumulate() {
        let mut dinos = vec![rex(60.0, 100.0)];
        let human = sam(70.0, 150.0);
        compare_all(&mut dinos, &human);
        compare_all(&mut dinos, &human);
        assert_eq!(dinos[0].facts.len(), 4 + 6);
        assert_eq!(dinos[0].facts[4..7], dinos[0].facts[7..10]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(60.0), "60");
        assert_eq!(format_number(60.5), "60.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.2345e25), "1.2345e+25");
    }

    #[test]
    fn test_large_weight_uses_exponent_form() {
        let mut dino = rex(60.0, 100.0);
        compare_weight(&mut dino, &sam(70.0, 1e21));
        assert_eq!(
            dino.facts.last().map(String::as_str),
            Some("1e+21 lbs for Sam is bigger than 100 lbs for Rex")
        );
    }

    #[test]
    fn test_negative_zero_weight_prints_as_zero() {
        let mut dino = rex(60.0, 100.0);
        compare_weight(&mut dino, &sam(70.0, -0.0));
        assert_eq!(
            dino.facts.last().map(String::as_str),
            Some("100 lbs for Rex is bigger than 0 lbs for Sam")
        );
    }
}
