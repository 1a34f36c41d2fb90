use super::evaluate::PercentMet;

/// One threshold check: fires when the selected percentage is below `below`.
struct FlagRule {
    percent: fn(&PercentMet) -> i64,
    below: i64,
    label: &'static str,
    recommendation: &'static str,
}

// Evaluated in order; alerts surface only the first match.
const RULES: [FlagRule; 3] = [
    FlagRule {
        percent: |p| p.iron,
        below: 50,
        label: "Severely low iron intake",
        recommendation: "Increase iron-rich foods: beans, leafy greens, meat.",
    },
    FlagRule {
        percent: |p| p.protein,
        below: 60,
        label: "Low protein intake",
        recommendation: "Add more protein: eggs, milk, legumes.",
    },
    FlagRule {
        percent: |p| p.calories,
        below: 80,
        label: "Low caloric intake",
        recommendation: "Try to eat more energy-rich meals.",
    },
];

/// Index-aligned flags and advice: `recommendations[i]` answers `flags[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub flags: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn generate_flags(percent_met: &PercentMet) -> Flags {
    let mut out = Flags::default();
    for rule in &RULES {
        let value = (rule.percent)(percent_met);
        if value < rule.below {
            out.flags.push(format!("{} ({}%)", rule.label, value));
            out.recommendations.push(rule.recommendation.to_string());
        }
    }
    out
}

#[cfg(test)]
mod flags_tests {
    use super::*;

    fn pm(calories: i64, protein: i64, iron: i64) -> PercentMet {
        PercentMet {
            calories,
            protein,
            iron,
        }
    }

    #[test]
    fn adequate_intake_raises_nothing() {
        assert_eq!(generate_flags(&pm(100, 100, 100)), Flags::default());
    }

    #[test]
    fn iron_boundary() {
        assert!(generate_flags(&pm(100, 100, 50)).flags.is_empty());
        let f = generate_flags(&pm(100, 100, 49));
        assert_eq!(f.flags, vec!["Severely low iron intake (49%)"]);
        assert_eq!(
            f.recommendations,
            vec!["Increase iron-rich foods: beans, leafy greens, meat."]
        );
    }

    #[test]
    fn protein_boundary() {
        assert!(generate_flags(&pm(100, 60, 100)).flags.is_empty());
        let f = generate_flags(&pm(100, 59, 100));
        assert_eq!(f.flags, vec!["Low protein intake (59%)"]);
        assert_eq!(f.recommendations, vec!["Add more protein: eggs, milk, legumes."]);
    }

    #[test]
    fn calories_boundary() {
        assert!(generate_flags(&pm(80, 100, 100)).flags.is_empty());
        let f = generate_flags(&pm(79, 100, 100));
        assert_eq!(f.flags, vec!["Low caloric intake (79%)"]);
        assert_eq!(f.recommendations, vec!["Try to eat more energy-rich meals."]);
    }

    #[test]
    fn all_flags_keep_fixed_order() {
        let f = generate_flags(&pm(0, 0, 0));
        assert_eq!(
            f.flags,
            vec![
                "Severely low iron intake (0%)",
                "Low protein intake (0%)",
                "Low caloric intake (0%)",
            ]
        );
        assert_eq!(f.recommendations.len(), 3);
        assert!(f.recommendations[0].starts_with("Increase iron-rich"));
        assert!(f.recommendations[1].starts_with("Add more protein"));
        assert!(f.recommendations[2].starts_with("Try to eat more"));
    }

    #[test]
    fn order_holds_when_only_later_rules_fire() {
        let f = generate_flags(&pm(10, 10, 90));
        assert_eq!(f.flags.len(), 2);
        assert!(f.flags[0].starts_with("Low protein"));
        assert!(f.flags[1].starts_with("Low caloric"));
    }
}
