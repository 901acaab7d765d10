use crate::config::ScenarioConfig;
use crate::core::{notification, order, payment, printer, shape};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The five principles, one demo each. Order of `ALL` is the order the
/// binary runs them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single responsibility: order service decomposition",
            Principle::Ocp => "Open/closed: payment strategy",
            Principle::Lsp => "Liskov substitution: sibling shape variants",
            Principle::Isp => "Interface segregation: printer capabilities",
            Principle::Dip => "Dependency inversion: notification composition",
        }
    }
}

/// Runs one demo with parameters taken from the scenario.
pub fn run_demo(principle: Principle, scenario: &ScenarioConfig) {
    println!("--- {} ---", principle.title());
    tracing::info!(principle = ?principle, "running demo");

    match principle {
        Principle::Srp => order::demonstrate(scenario.order.order_id),
        Principle::Ocp => payment::demonstrate(scenario.payment.amount),
        Principle::Lsp => shape::demonstrate(
            scenario.shapes.rectangle_width,
            scenario.shapes.rectangle_height,
            scenario.shapes.square_side,
        ),
        Principle::Isp => printer::demonstrate(),
        Principle::Dip => notification::demonstrate(
            &scenario.notification.recipient,
            &scenario.notification.message,
        ),
    }
}

/// Runs every demo in the fixed S-O-L-I-D order.
pub fn run_all(scenario: &ScenarioConfig) {
    for principle in Principle::ALL {
        run_demo(principle, scenario);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_principle_once() {
        for principle in Principle::ALL {
            let count = Principle::ALL.iter().filter(|p| **p == principle).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn every_demo_runs_with_default_scenario() {
        let scenario = ScenarioConfig::default();
        run_all(&scenario);
    }

    #[test]
    fn principle_parses_from_lowercase_toml_value() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            principle: Principle,
        }

        let parsed: Wrapper = toml::from_str("principle = \"dip\"").unwrap();
        assert_eq!(parsed.principle, Principle::Dip);
    }
}
