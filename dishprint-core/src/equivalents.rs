//! Everyday equivalents of a footprint, for giving the number some scale.

use serde::{Deserialize, Serialize};

/// Km driven in an average car per kg CO2e.
pub const CAR_KM_PER_KG: f64 = 4.5;

/// Hours of LED bulb use per kg CO2e.
pub const LED_HOURS_PER_KG: f64 = 120.0;

/// Smartphone charges per kg CO2e.
pub const PHONE_CHARGES_PER_KG: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equivalents {
    pub car_km: f64,
    pub led_hours: f64,
    pub phone_charges: f64,
}

impl Equivalents {
    pub fn for_total(total_co2: f64) -> Self {
        Self {
            car_km: total_co2 * CAR_KM_PER_KG,
            led_hours: total_co2 * LED_HOURS_PER_KG,
            phone_charges: total_co2 * PHONE_CHARGES_PER_KG,
        }
    }

    /// Display lines, e.g. "🚗 Driving 18.0 km in an average car".
    pub fn lines(&self) -> [String; 3] {
        [
            format!("🚗 Driving {:.1} km in an average car", self.car_km),
            format!("💡 {:.0} hours of LED light bulb usage", self.led_hours),
            format!("📱 Charging a smartphone {:.0} times", self.phone_charges),
        ]
    }
}
