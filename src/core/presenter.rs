use crate::core::calculator::compute_additional_salt;
use crate::domain::model::{
    Advisory, SaltResult, DEFAULT_TARGET_SODIUM_PER_LB_MG, PINCH_THRESHOLD_TSP,
};
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const SIGN_OFF: &str = "Thanks for using the BBQ calculator! 🍖";
pub const INVALID_INPUT: &str = "Please enter valid numbers!";

/// The two fixed demo scenarios: (title, rub sodium per 1/4 tsp).
const DEMO_SCENARIOS: [(&str, f64); 2] = [
    ("Scenario 1: Low Sodium Rub (110mg/1/4 tsp)", 110.0),
    ("Scenario 2: High Sodium Rub (200mg/1/4 tsp)", 200.0),
];
const DEMO_WEIGHT_LBS: f64 = 5.0;
// 2 tablespoons
const DEMO_RUB_AMOUNT_TSP: f64 = 6.0;

pub fn advisory_for(result: &SaltResult) -> Advisory {
    let tsp = result.additional_kosher_salt_tsp;
    if tsp == 0.0 {
        Advisory::NoSaltNeeded
    } else if tsp < PINCH_THRESHOLD_TSP {
        Advisory::Pinch
    } else {
        Advisory::AddSalt(tsp)
    }
}

pub fn advisory_message(advisory: Advisory) -> String {
    match advisory {
        Advisory::NoSaltNeeded => {
            "✅ No additional salt needed! Your rub has enough sodium.".to_string()
        }
        Advisory::Pinch => "💡 Just a pinch of kosher salt needed!".to_string(),
        Advisory::AddSalt(tsp) => format!("🧂 Add {:?} tsp of kosher salt", tsp),
    }
}

/// How the input-derived figures of a report are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Whole numbers without a decimal point (`5`, `2640`), as in the fixed demo.
    Plain,
    /// Always with a decimal point (`5.0`, `2640.0`), for values typed at the prompts.
    Float,
}

impl NumberStyle {
    fn show(self, value: f64) -> String {
        match self {
            NumberStyle::Plain => format!("{}", value),
            NumberStyle::Float => format!("{:?}", value),
        }
    }

    // A clamped deficit is a plain zero in either style.
    fn show_deficit(self, value: f64) -> String {
        if value <= 0.0 {
            "0".to_string()
        } else {
            self.show(value)
        }
    }
}

/// The salt volumes are rounded values and always keep their decimal point.
pub fn format_report(result: &SaltResult, style: NumberStyle) -> String {
    let lines = [
        String::new(),
        "=== BBQ Salt Calculator Results ===".to_string(),
        format!("Rib weight: {} lbs", style.show(result.weight_lbs)),
        format!("BBQ rub amount: {} tsp", style.show(result.rub_amount_tsp)),
        format!(
            "Target total sodium: {} mg",
            style.show(result.target_total_sodium_mg)
        ),
        format!(
            "Sodium from BBQ rub: {} mg",
            style.show(result.sodium_from_rub_mg)
        ),
        format!(
            "Additional sodium needed: {} mg",
            style.show_deficit(result.additional_sodium_needed_mg)
        ),
        String::new(),
        "--- Additional Kosher Salt Needed ---".to_string(),
        format!("Teaspoons: {:?} tsp", result.additional_kosher_salt_tsp),
        format!(
            "Quarter-teaspoons: {:?} (1/4 tsp)",
            result.additional_kosher_salt_quarter_tsp
        ),
        String::new(),
        advisory_message(advisory_for(result)),
    ];
    lines.join("\n")
}

pub fn format_json(result: &SaltResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn banner() -> String {
    [
        "🍖 BBQ Rub Sodium Calculator 🍖",
        "Help determine additional kosher salt needed for your ribs!",
    ]
    .join("\n")
}

/// A title framed by `=` rules, preceded by a blank line.
pub fn section_heading(title: &str, width: usize) -> String {
    let rule = "=".repeat(width);
    format!("\n{}\n{}\n{}", rule, title, rule)
}

pub fn format_tips() -> String {
    let tips = [
        "• Kosher salt: ~480mg sodium per 1/4 tsp",
        "• Table salt: ~580mg sodium per 1/4 tsp",
        "• General rule: 1/2 tsp kosher salt per lb of meat",
        "• Apply salt 40+ minutes before cooking for best results",
        "• Consider the saltiness of your BBQ sauce too!",
    ];
    format!("{}\n{}", section_heading("💡 TIPS:", 30), tips.join("\n"))
}

/// Prints the two fixed demo scenarios. Returns the computed results in order.
pub async fn run_demo<C: Console + ?Sized>(console: &mut C, json: bool) -> Result<Vec<SaltResult>> {
    console
        .write_line(&section_heading("EXAMPLE: 5 lbs of ribs with different rubs", 50))
        .await?;

    let mut results = Vec::with_capacity(DEMO_SCENARIOS.len());
    for (title, rub_sodium) in DEMO_SCENARIOS {
        let result = compute_additional_salt(
            DEMO_WEIGHT_LBS,
            rub_sodium,
            DEMO_RUB_AMOUNT_TSP,
            DEFAULT_TARGET_SODIUM_PER_LB_MG,
        );
        console.write_line(&format!("\n--- {} ---", title)).await?;
        console
            .write_line(&format_report(&result, NumberStyle::Plain))
            .await?;
        if json {
            console.write_line(&format_json(&result)?).await?;
        }
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Default)]
    struct RecordingConsole {
        output: String,
    }

    #[async_trait]
    impl Console for RecordingConsole {
        async fn prompt(&mut self, _prompt: &str) -> Result<String> {
            Err(crate::utils::error::SaltError::Cancelled)
        }

        async fn write(&mut self, text: &str) -> Result<()> {
            self.output.push_str(text);
            Ok(())
        }
    }

    fn result_with_tsp(tsp: f64) -> SaltResult {
        SaltResult {
            weight_lbs: 1.0,
            rub_amount_tsp: 0.0,
            target_total_sodium_mg: 0.0,
            sodium_from_rub_mg: 0.0,
            additional_sodium_needed_mg: 0.0,
            additional_kosher_salt_tsp: tsp,
            additional_kosher_salt_quarter_tsp: tsp * 4.0,
        }
    }

    #[test]
    fn test_advisory_tiers() {
        assert_eq!(advisory_for(&result_with_tsp(0.0)), Advisory::NoSaltNeeded);
        assert_eq!(advisory_for(&result_with_tsp(0.01)), Advisory::Pinch);
        assert_eq!(advisory_for(&result_with_tsp(0.24)), Advisory::Pinch);
        assert_eq!(advisory_for(&result_with_tsp(1.23)), Advisory::AddSalt(1.23));
    }

    #[test]
    fn test_quarter_tsp_boundary_is_not_a_pinch() {
        // 5 lbs at 624 mg/lb = 3120 mg, rub gives 2640 mg, leaving 480 mg = 1/4 tsp
        let result = compute_additional_salt(5.0, 110.0, 6.0, 624.0);
        assert_eq!(result.additional_kosher_salt_tsp, 0.25);
        assert_eq!(advisory_for(&result), Advisory::AddSalt(0.25));
        assert!(format_report(&result, NumberStyle::Plain)
            .contains("🧂 Add 0.25 tsp of kosher salt"));
    }

    #[test]
    fn test_format_report_low_sodium_scenario() {
        let result = compute_additional_salt(5.0, 110.0, 6.0, 1000.0);
        let report = format_report(&result, NumberStyle::Plain);

        assert!(report.contains("Rib weight: 5 lbs"));
        assert!(report.contains("BBQ rub amount: 6 tsp"));
        assert!(report.contains("Target total sodium: 5000 mg"));
        assert!(report.contains("Sodium from BBQ rub: 2640 mg"));
        assert!(report.contains("Additional sodium needed: 2360 mg"));
        assert!(report.contains("Teaspoons: 1.23 tsp"));
        assert!(report.contains("Quarter-teaspoons: 4.92 (1/4 tsp)"));
        assert!(report.ends_with("🧂 Add 1.23 tsp of kosher salt"));
    }

    #[test]
    fn test_format_report_pinch_and_none() {
        let pinch = compute_additional_salt(5.0, 200.0, 6.0, 1000.0);
        assert!(format_report(&pinch, NumberStyle::Plain)
            .ends_with("💡 Just a pinch of kosher salt needed!"));

        let none = compute_additional_salt(5.0, 300.0, 6.0, 1000.0);
        assert!(format_report(&none, NumberStyle::Plain).contains("No additional salt needed!"));
    }

    #[test]
    fn test_float_style_keeps_decimal_point() {
        let result = compute_additional_salt(5.0, 200.0, 6.0, 1000.0);
        let report = format_report(&result, NumberStyle::Float);

        assert!(report.contains("Rib weight: 5.0 lbs"));
        assert!(report.contains("BBQ rub amount: 6.0 tsp"));
        assert!(report.contains("Target total sodium: 5000.0 mg"));
        assert!(report.contains("Sodium from BBQ rub: 4800.0 mg"));
        assert!(report.contains("Additional sodium needed: 200.0 mg"));
        assert!(report.contains("Teaspoons: 0.1 tsp"));
        assert!(report.contains("Quarter-teaspoons: 0.42 (1/4 tsp)"));
    }

    #[test]
    fn test_zero_salt_volumes_keep_decimal_point() {
        let none = compute_additional_salt(5.0, 300.0, 6.0, 1000.0);

        let plain = format_report(&none, NumberStyle::Plain);
        assert!(plain.contains("Additional sodium needed: 0 mg"));
        assert!(plain.contains("Teaspoons: 0.0 tsp"));
        assert!(plain.contains("Quarter-teaspoons: 0.0 (1/4 tsp)"));

        let float = format_report(&none, NumberStyle::Float);
        assert!(float.contains("Additional sodium needed: 0 mg"));
        assert!(float.contains("Sodium from BBQ rub: 7200.0 mg"));
    }

    #[test]
    fn test_whole_salt_volume_in_advisory() {
        // 1 lb at 1920 mg/lb with no rub = 1920 mg = exactly 1 tsp
        let result = compute_additional_salt(1.0, 0.0, 0.0, 1920.0);
        assert_eq!(
            advisory_message(advisory_for(&result)),
            "🧂 Add 1.0 tsp of kosher salt"
        );
    }

    #[test]
    fn test_format_json_uses_field_names() {
        let result = compute_additional_salt(5.0, 110.0, 6.0, 1000.0);
        let json = format_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["additional_kosher_salt_tsp"], serde_json::json!(1.23));
        assert_eq!(value["sodium_from_rub_mg"], serde_json::json!(2640.0));
    }

    #[test]
    fn test_format_tips_lists_every_tip() {
        let tips = format_tips();
        assert!(tips.contains("💡 TIPS:"));
        assert_eq!(tips.matches('•').count(), 5);
        assert!(tips.contains("~480mg sodium per 1/4 tsp"));
    }

    #[tokio::test]
    async fn test_run_demo_prints_both_scenarios() {
        let mut console = RecordingConsole::default();
        let results = run_demo(&mut console, false).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].additional_kosher_salt_tsp, 1.23);
        assert_eq!(results[1].additional_kosher_salt_tsp, 0.10);
        assert!(console.output.contains("Scenario 1: Low Sodium Rub"));
        assert!(console.output.contains("Scenario 2: High Sodium Rub"));
        assert!(!console.output.contains("\"weight_lbs\""));
    }

    #[tokio::test]
    async fn test_run_demo_with_json() {
        let mut console = RecordingConsole::default();
        run_demo(&mut console, true).await.unwrap();

        assert_eq!(console.output.matches("\"weight_lbs\": 5.0").count(), 2);
    }
}
