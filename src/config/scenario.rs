//! Scenario parameters for the demos, loadable from a TOML file. Every table
//! and field is optional; missing values fall back to the reference defaults
//! so a scenario file only needs to name what it changes.

use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub notification: NotificationParams,
    pub payment: PaymentParams,
    pub shapes: ShapeParams,
    pub order: OrderParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationParams {
    pub recipient: String,
    pub message: String,
}

impl Default for NotificationParams {
    fn default() -> Self {
        Self {
            recipient: "alice@example.com".to_string(),
            message: "Your order has shipped".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentParams {
    pub amount: f64,
}

impl Default for PaymentParams {
    fn default() -> Self {
        Self { amount: 100.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    pub rectangle_width: f64,
    pub rectangle_height: f64,
    pub square_side: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            rectangle_width: 4.0,
            rectangle_height: 2.0,
            square_side: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderParams {
    pub order_id: u64,
}

impl Default for OrderParams {
    fn default() -> Self {
        Self { order_id: 42 }
    }
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::TomlParse {
            message: e.to_string(),
        })
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("notification.recipient", &self.notification.recipient)?;
        validate_non_empty_string("notification.message", &self.notification.message)?;
        validate_non_negative("payment.amount", self.payment.amount)?;
        validate_positive("shapes.rectangle_width", self.shapes.rectangle_width)?;
        validate_positive("shapes.rectangle_height", self.shapes.rectangle_height)?;
        validate_positive("shapes.square_side", self.shapes.square_side)?;
        Ok(())
    }
}
