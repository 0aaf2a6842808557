//! Part record type for reliability prediction
//!
//! A `PartRecord` carries everything one MIL-HDBK-217F calculation needs:
//! classification identifiers, electrical/thermal stress inputs, scaling
//! inputs, and the computed outputs. Calculators mutate the record in
//! place and report problems through diagnostics rather than errors, so a
//! record can always be serialized back out whatever happened.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Component family covered by the prediction engine.
///
/// Discriminants match the MIL-HDBK-217F category numbering used
/// throughout the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Resistor = 3,
    Capacitor = 4,
    Relay = 6,
    Switch = 7,
    Connection = 8,
    Meter = 9,
    Miscellaneous = 10,
}

impl Category {
    /// Handbook category number.
    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(id: u32) -> Option<Category> {
        match id {
            3 => Some(Category::Resistor),
            4 => Some(Category::Capacitor),
            6 => Some(Category::Relay),
            7 => Some(Category::Switch),
            8 => Some(Category::Connection),
            9 => Some(Category::Meter),
            10 => Some(Category::Miscellaneous),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Resistor => write!(f, "resistor"),
            Category::Capacitor => write!(f, "capacitor"),
            Category::Relay => write!(f, "relay"),
            Category::Switch => write!(f, "switch"),
            Category::Connection => write!(f, "connection"),
            Category::Meter => write!(f, "meter"),
            Category::Miscellaneous => write!(f, "miscellaneous"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resistor" => Ok(Category::Resistor),
            "capacitor" => Ok(Category::Capacitor),
            "relay" => Ok(Category::Relay),
            "switch" => Ok(Category::Switch),
            "connection" | "connector" => Ok(Category::Connection),
            "meter" => Ok(Category::Meter),
            "miscellaneous" | "misc" => Ok(Category::Miscellaneous),
            _ => Err(format!("Unknown part category: {}", s)),
        }
    }
}

/// Prediction method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionMethod {
    /// Parts count: base hazard rate times quality factor.
    #[default]
    PartsCount,
    /// Parts stress: closed-form base rate times the category pi chain.
    PartsStress,
}

impl PredictionMethod {
    pub fn from_id(id: u32) -> Option<PredictionMethod> {
        match id {
            1 => Some(PredictionMethod::PartsCount),
            2 => Some(PredictionMethod::PartsStress),
            _ => None,
        }
    }
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionMethod::PartsCount => write!(f, "parts-count"),
            PredictionMethod::PartsStress => write!(f, "parts-stress"),
        }
    }
}

impl FromStr for PredictionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parts-count" | "count" | "1" => Ok(PredictionMethod::PartsCount),
            "parts-stress" | "stress" | "2" => Ok(PredictionMethod::PartsStress),
            _ => Err(format!("Unknown prediction method: {}", s)),
        }
    }
}

fn default_duty_cycle() -> f64 {
    100.0
}

fn default_quantity() -> i32 {
    1
}

fn default_mult_adj() -> f64 {
    1.0
}

/// One hardware item submitted for prediction.
///
/// Identifier fields are 1-based handbook indices; 0 means "not set" and
/// surfaces as a lookup miss if the category model needs the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartRecord {
    // --- classification ---
    pub hardware_id: i32,
    pub category: Category,
    pub subcategory_id: u32,
    pub type_id: u32,
    pub specification_id: u32,
    pub quality_id: u32,
    pub environment_active_id: u32,
    pub environment_dormant_id: u32,
    pub construction_id: u32,
    pub contact_form_id: u32,
    pub contact_rating_id: u32,
    pub application_id: u32,
    pub insert_id: u32,
    pub configuration_id: u32,
    pub family_id: u32,
    pub insulation_id: u32,
    pub technology_id: u32,
    pub hazard_rate_method_id: u32,

    // --- stress inputs ---
    pub temperature_active: f64,
    pub temperature_rated_max: f64,
    pub power_operating: f64,
    pub power_rated: f64,
    pub current_operating: f64,
    pub current_rated: f64,
    pub voltage_ac_operating: f64,
    pub voltage_dc_operating: f64,
    pub voltage_rated: f64,
    pub capacitance: f64,
    pub resistance: f64,
    pub frequency_operating: f64,
    pub n_cycles: f64,
    pub contact_gauge: u32,
    pub n_active_pins: u32,
    pub n_elements: u32,
    pub n_wave_soldered: u32,
    pub n_hand_soldered: u32,
    pub n_circuit_planes: u32,

    // --- scaling inputs ---
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default = "default_mult_adj")]
    pub mult_adj_factor: f64,
    pub add_adj_factor: f64,

    // --- computed outputs ---
    #[serde(skip_serializing_if = "is_zero")]
    pub lambda_b: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_q: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_e: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_a: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_c: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_cf: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_cv: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_cyc: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_f: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_k: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_l: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_p: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_r: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_sr: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_t: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_taps: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_u: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pi_v: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub current_ratio: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub power_ratio: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub voltage_ratio: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub temperature_rise: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub temperature_case: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub hazard_rate_active: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub hazard_rate_dormant: f64,
    pub overstress: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Default for PartRecord {
    fn default() -> Self {
        PartRecord {
            hardware_id: 0,
            category: Category::default(),
            subcategory_id: 0,
            type_id: 0,
            specification_id: 0,
            quality_id: 0,
            environment_active_id: 0,
            environment_dormant_id: 0,
            construction_id: 0,
            contact_form_id: 0,
            contact_rating_id: 0,
            application_id: 0,
            insert_id: 0,
            configuration_id: 0,
            family_id: 0,
            insulation_id: 0,
            technology_id: 0,
            hazard_rate_method_id: 0,
            temperature_active: 0.0,
            temperature_rated_max: 0.0,
            power_operating: 0.0,
            power_rated: 0.0,
            current_operating: 0.0,
            current_rated: 0.0,
            voltage_ac_operating: 0.0,
            voltage_dc_operating: 0.0,
            voltage_rated: 0.0,
            capacitance: 0.0,
            resistance: 0.0,
            frequency_operating: 0.0,
            n_cycles: 0.0,
            contact_gauge: 0,
            n_active_pins: 0,
            n_elements: 0,
            n_wave_soldered: 0,
            n_hand_soldered: 0,
            n_circuit_planes: 0,
            duty_cycle: default_duty_cycle(),
            quantity: default_quantity(),
            mult_adj_factor: default_mult_adj(),
            add_adj_factor: 0.0,
            lambda_b: 0.0,
            pi_q: 0.0,
            pi_e: 0.0,
            pi_a: 0.0,
            pi_c: 0.0,
            pi_cf: 0.0,
            pi_cv: 0.0,
            pi_cyc: 0.0,
            pi_f: 0.0,
            pi_k: 0.0,
            pi_l: 0.0,
            pi_p: 0.0,
            pi_r: 0.0,
            pi_sr: 0.0,
            pi_t: 0.0,
            pi_taps: 0.0,
            pi_u: 0.0,
            pi_v: 0.0,
            current_ratio: 0.0,
            power_ratio: 0.0,
            voltage_ratio: 0.0,
            temperature_rise: 0.0,
            temperature_case: 0.0,
            hazard_rate_active: 0.0,
            hazard_rate_dormant: 0.0,
            overstress: false,
            reason: String::new(),
        }
    }
}

impl PartRecord {
    /// Combined operating voltage used for the voltage stress ratio.
    pub fn voltage_operating(&self) -> f64 {
        self.voltage_ac_operating + self.voltage_dc_operating
    }
}
