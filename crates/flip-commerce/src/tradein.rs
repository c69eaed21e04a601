//! Trade-in quote calculation.
//!
//! Pure pricing: no state, no I/O. The policy is a flat base rate on the
//! device's market price, scaled by condition, device type, and damage
//! penalties, with a minimum payout floor. Every coefficient lives in
//! [`QuoteConfig`] so the policy is configuration, not code.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of device offered for trade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeviceKind {
    #[default]
    Phone,
    Tablet,
    Laptop,
    Watch,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Phone => "phone",
            DeviceKind::Tablet => "tablet",
            DeviceKind::Laptop => "laptop",
            DeviceKind::Watch => "watch",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "phone" => Some(DeviceKind::Phone),
            "tablet" => Some(DeviceKind::Tablet),
            "laptop" => Some(DeviceKind::Laptop),
            "watch" => Some(DeviceKind::Watch),
            _ => None,
        }
    }
}

/// Overall condition declared by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeviceCondition {
    LikeNew,
    #[default]
    Good,
    Worn,
    Poor,
}

impl DeviceCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCondition::LikeNew => "like-new",
            DeviceCondition::Good => "good",
            DeviceCondition::Worn => "worn",
            DeviceCondition::Poor => "poor",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "like-new" => Some(DeviceCondition::LikeNew),
            "good" => Some(DeviceCondition::Good),
            "worn" => Some(DeviceCondition::Worn),
            "poor" => Some(DeviceCondition::Poor),
            _ => None,
        }
    }
}

/// Screen damage declared by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScreenDamage {
    #[default]
    None,
    Minor,
    Major,
}

/// Everything the quote form collects about the device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeInRequest {
    /// Kind of device.
    pub device: DeviceKind,
    /// Declared condition.
    pub condition: DeviceCondition,
    /// Screen damage, if any.
    pub screen: ScreenDamage,
    /// Whether the device powers on.
    pub powers_on: bool,
    /// Whether the device is carrier-locked.
    pub carrier_locked: bool,
}

impl TradeInRequest {
    /// A request for a working, unlocked device.
    pub fn new(device: DeviceKind, condition: DeviceCondition) -> Self {
        Self {
            device,
            condition,
            screen: ScreenDamage::None,
            powers_on: true,
            carrier_locked: false,
        }
    }
}

/// Trade-in pricing coefficients.
///
/// Defaults encode the storefront's flat-rate policy: 40% of market price,
/// scaled down for condition, device type, and damage, never below the
/// minimum payout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteConfig {
    /// Share of market price offered for a like-new, fully working device.
    pub base_rate: f64,
    /// Condition multipliers.
    pub like_new_factor: f64,
    pub good_factor: f64,
    pub worn_factor: f64,
    pub poor_factor: f64,
    /// Device type adjustments.
    pub phone_factor: f64,
    pub tablet_factor: f64,
    pub laptop_factor: f64,
    pub watch_factor: f64,
    /// Damage penalties.
    pub screen_minor_factor: f64,
    pub screen_major_factor: f64,
    pub no_power_factor: f64,
    /// Floor applied to any otherwise-positive offer.
    pub min_payout: Money,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_rate: 0.40,
            like_new_factor: 1.0,
            good_factor: 0.85,
            worn_factor: 0.70,
            poor_factor: 0.50,
            phone_factor: 1.0,
            tablet_factor: 0.90,
            laptop_factor: 0.95,
            watch_factor: 0.80,
            screen_minor_factor: 0.85,
            screen_major_factor: 0.60,
            no_power_factor: 0.60,
            min_payout: Money::new(1000, crate::money::Currency::USD),
        }
    }
}

impl QuoteConfig {
    fn condition_factor(&self, condition: DeviceCondition) -> f64 {
        match condition {
            DeviceCondition::LikeNew => self.like_new_factor,
            DeviceCondition::Good => self.good_factor,
            DeviceCondition::Worn => self.worn_factor,
            DeviceCondition::Poor => self.poor_factor,
        }
    }

    fn device_factor(&self, device: DeviceKind) -> f64 {
        match device {
            DeviceKind::Phone => self.phone_factor,
            DeviceKind::Tablet => self.tablet_factor,
            DeviceKind::Laptop => self.laptop_factor,
            DeviceKind::Watch => self.watch_factor,
        }
    }

    fn screen_factor(&self, screen: ScreenDamage) -> f64 {
        match screen {
            ScreenDamage::None => 1.0,
            ScreenDamage::Minor => self.screen_minor_factor,
            ScreenDamage::Major => self.screen_major_factor,
        }
    }
}

/// Quote calculation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Market price must be positive; zero or negative input is rejected,
    /// never silently computed.
    #[error("Market price must be positive")]
    NonPositivePrice,
}

/// Compute a trade-in offer.
///
/// A carrier-locked device is worth nothing regardless of condition (the
/// floor does not apply). Otherwise the offer is
/// `market * base * condition * type * screen * power`, rounded to cents
/// and floored at the configured minimum payout.
pub fn quote(
    request: &TradeInRequest,
    market_price: Money,
    config: &QuoteConfig,
) -> Result<Money, QuoteError> {
    if !market_price.is_positive() {
        return Err(QuoteError::NonPositivePrice);
    }

    if request.carrier_locked {
        return Ok(Money::zero(market_price.currency));
    }

    let factor = config.base_rate
        * config.condition_factor(request.condition)
        * config.device_factor(request.device)
        * config.screen_factor(request.screen)
        * if request.powers_on {
            1.0
        } else {
            config.no_power_factor
        };

    let offer = market_price.multiply_decimal(factor);
    Ok(offer.max(&config.min_payout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_like_new_phone_base_offer() {
        let request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew);
        let offer = quote(&request, usd(100_000), &QuoteConfig::default()).unwrap();
        assert_eq!(offer.amount_cents, 40_000); // 40% of $1000
    }

    #[test]
    fn test_condition_is_monotonic() {
        let config = QuoteConfig::default();
        let like_new = quote(
            &TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew),
            usd(100_000),
            &config,
        )
        .unwrap();
        let poor = quote(
            &TradeInRequest::new(DeviceKind::Phone, DeviceCondition::Poor),
            usd(100_000),
            &config,
        )
        .unwrap();
        assert!(poor.amount_cents < like_new.amount_cents);
    }

    #[test]
    fn test_device_type_adjusts_offer() {
        let config = QuoteConfig::default();
        let phone = quote(
            &TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew),
            usd(100_000),
            &config,
        )
        .unwrap();
        let tablet = quote(
            &TradeInRequest::new(DeviceKind::Tablet, DeviceCondition::LikeNew),
            usd(100_000),
            &config,
        )
        .unwrap();
        assert_eq!(tablet.amount_cents, 36_000); // 40% * 0.90
        assert!(tablet.amount_cents < phone.amount_cents);
    }

    #[test]
    fn test_damage_penalties_stack() {
        let config = QuoteConfig::default();
        let mut request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew);
        request.screen = ScreenDamage::Major;
        request.powers_on = false;

        let offer = quote(&request, usd(100_000), &config).unwrap();
        // 100000 * 0.40 * 0.60 * 0.60
        assert_eq!(offer.amount_cents, 14_400);
    }

    #[test]
    fn test_locked_device_is_worthless() {
        let config = QuoteConfig::default();
        let mut request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew);
        request.carrier_locked = true;

        let offer = quote(&request, usd(100_000), &config).unwrap();
        assert!(offer.is_zero()); // the floor does not apply
    }

    #[test]
    fn test_minimum_payout_floor() {
        let config = QuoteConfig::default();
        let request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::Poor);
        // 20% of $20 would be $4, below the $10 floor.
        let offer = quote(&request, usd(2_000), &config).unwrap();
        assert_eq!(offer, config.min_payout);
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::Good);
        let config = QuoteConfig::default();
        assert_eq!(
            quote(&request, usd(0), &config),
            Err(QuoteError::NonPositivePrice)
        );
        assert_eq!(
            quote(&request, usd(-500), &config),
            Err(QuoteError::NonPositivePrice)
        );
    }

    #[test]
    fn test_config_overrides_change_offer() {
        let mut config = QuoteConfig::default();
        config.base_rate = 0.50;
        let request = TradeInRequest::new(DeviceKind::Phone, DeviceCondition::LikeNew);

        let offer = quote(&request, usd(100_000), &config).unwrap();
        assert_eq!(offer.amount_cents, 50_000);
    }

    #[test]
    fn test_selector_values_roundtrip() {
        assert_eq!(DeviceKind::from_value("Phone"), Some(DeviceKind::Phone));
        assert_eq!(DeviceKind::from_value("toaster"), None);
        assert_eq!(
            DeviceCondition::from_value("like-new"),
            Some(DeviceCondition::LikeNew)
        );
        assert_eq!(DeviceCondition::from_value("broken"), None);
    }
}
