use anyhow::{Context, Result};
use consumption_viewer::data::export::export_json;
use consumption_viewer::data::loader::DEFAULT_SOURCE;
use consumption_viewer::data::model::IssueRecord;
use serde_json::{Map, Value as JsonValue, json};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const LOCATIONS: [&str; 8] = [
    "Building A - Floor 2",
    "Building B - Server Room",
    "Warehouse 1",
    "Cafeteria",
    "Parking Garage Lighting",
    "Lab 3",
    "Main Lobby HVAC",
    "Data Center Annex",
];
const TYPES: [&str; 3] = ["High Consumption", "Low Consumption", "Intermittent"];
const SEVERITIES: [&str; 4] = ["Critical", "High", "Medium", "Low"];
const STATUSES: [&str; 3] = ["Open", "In Progress", "Resolved"];
const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const PATTERNS: [&str; 4] = [
    "Consumption peaks between 22:00 and 04:00",
    "Gradual increase over the last quarter",
    "Sharp drops on weekends",
    "Irregular spikes every few days",
];
const FACTORS: [&str; 3] = [
    "Heat wave in June",
    "New tenant moved in",
    "Extended opening hours",
];

fn history(rng: &mut SimpleRng, expected: f64, deviation: f64) -> JsonValue {
    let months: Map<String, JsonValue> = MONTHS
        .iter()
        .enumerate()
        .map(|(i, &month)| {
            // Drift from expected usage toward the current deviation.
            let progress = (i + 1) as f64 / MONTHS.len() as f64;
            let usage = expected * (1.0 + deviation / 100.0 * progress) * rng.range(0.95, 1.05);
            let status = if (usage - expected).abs() / expected > 0.15 {
                "Abnormal"
            } else {
                "Normal"
            };
            let entry = json!({
                "usage": format!("{}", usage.round() as i64),
                "status": status,
            });
            (month.to_string(), entry)
        })
        .collect();
    JsonValue::Object(months)
}

fn issue(rng: &mut SimpleRng, id: i64) -> IssueRecord {
    let issue_type = *rng.pick(&TYPES);
    let expected = rng.range(800.0, 5000.0).round();
    let deviation = match issue_type {
        "High Consumption" => rng.range(15.0, 80.0),
        "Low Consumption" => -rng.range(15.0, 60.0),
        _ => rng.range(-25.0, 25.0),
    };
    let current = (expected * (1.0 + deviation / 100.0)).round();
    let status = *rng.pick(&STATUSES);

    let mut rec = json!({
        "id": id,
        "location": rng.pick(&LOCATIONS),
        "issue_type": issue_type,
        "severity": rng.pick(&SEVERITIES),
        "status": status,
        "current_usage": format!("{current} kWh"),
        "expected_usage": format!("{expected} kWh"),
        "reported_date": format!("2025-{:02}-{:02}", 1 + id % 12, 1 + (id * 7) % 28),
        "description": format!("{issue_type} detected by meter analysis"),
        "estimated_cost": format!("${:.0}", (current - expected).abs() * 0.14),
    });

    // Leave some optional fields out so the viewer's N/A paths get exercised.
    if id % 4 != 0 {
        rec["energy_deviation_percentage"] = json!((deviation * 10.0).round() / 10.0);
        rec["monthly_history"] = history(rng, expected, deviation);
    }
    if id % 3 != 0 {
        rec["pattern_analysis"] = json!(rng.pick(&PATTERNS));
        rec["last_maintenance"] = json!(format!("2024-{:02}-15", 1 + id % 12));
    }
    if id % 5 == 0 {
        rec["external_factors"] = json!(rng.pick(&FACTORS));
    }
    if status != "Open" {
        rec["solution"] = json!(
            "Replaced faulty contactor and recalibrated the sub-meter; monitoring for two billing cycles."
        );
    }
    IssueRecord::from_value(rec)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let issues: Vec<IssueRecord> = (1..=24).map(|id| issue(&mut rng, id)).collect();

    let text = export_json(&issues)?;
    std::fs::write(DEFAULT_SOURCE, text).with_context(|| format!("writing {DEFAULT_SOURCE}"))?;

    println!("Wrote {} issues to {DEFAULT_SOURCE}", issues.len());
    Ok(())
}
