// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider price catalog.
//!
//! One sheet per component kind, one rate card per provider, one named rate
//! per formula input. Lookups distinguish a missing provider from a missing
//! rate, and a missing rate from a rate of zero.

use std::collections::BTreeMap;

use costscope_core::{ComponentKind, CostError};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::warn;

/// Rate names read by the cost formulas.
pub mod rates {
    pub const COST_PER_INPUT_TOKEN: &str = "cost_per_input_token";
    pub const COST_PER_OUTPUT_TOKEN: &str = "cost_per_output_token";
    pub const COST_PER_TOKEN: &str = "cost_per_token";
    pub const COST_PER_MIN: &str = "cost_per_min";
    pub const COST_PER_IMAGE: &str = "cost_per_image";
    pub const COST_STORAGE_GB_MONTH: &str = "cost_storage_GB_month";
    pub const COST_PER_WU: &str = "cost_per_WU";
    pub const COST_PER_RU: &str = "cost_per_RU";
    pub const VECTORS_PER_U: &str = "vectors_per_U";
    pub const COST_PER_WRITE_OPERATION: &str = "cost_per_write_operation";
    pub const COST_PER_READ_OPERATION: &str = "cost_per_read_operation";
}

/// Named rates of one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateCard(BTreeMap<String, f64>);

impl RateCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Raw value of a rate, `None` when the card has no such rate.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RateCard {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Sheet name to provider to rate card, as written in a catalog file.
type RawCatalog = BTreeMap<String, BTreeMap<String, RateCard>>;

/// Immutable price reference data, shared by every estimate.
///
/// Deserializes from a mapping of sheet name to provider to rate name, e.g.
/// `[RAG.pinecone]` followed by `cost_per_WU = 2e-6`. Unknown sheet names are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog", into = "RawCatalog")]
pub struct PriceCatalog {
    sheets: BTreeMap<ComponentKind, BTreeMap<String, RateCard>>,
}

impl TryFrom<RawCatalog> for PriceCatalog {
    type Error = String;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let mut sheets = BTreeMap::new();
        for (name, sheet) in raw {
            let kind = name
                .parse::<ComponentKind>()
                .map_err(|_| format!("unknown component kind `{name}`"))?;
            sheets.insert(kind, sheet);
        }
        Ok(Self { sheets })
    }
}

impl From<PriceCatalog> for RawCatalog {
    fn from(catalog: PriceCatalog) -> Self {
        catalog
            .sheets
            .into_iter()
            .map(|(kind, sheet)| (kind.to_string(), sheet))
            .collect()
    }
}

impl PriceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rate card of `provider` in the `kind` sheet.
    pub fn insert(&mut self, kind: ComponentKind, provider: impl Into<String>, card: RateCard) {
        self.sheets
            .entry(kind)
            .or_default()
            .insert(provider.into(), card);
    }

    /// Builder-style variant of [`PriceCatalog::insert`].
    pub fn with_provider(
        mut self,
        kind: ComponentKind,
        provider: impl Into<String>,
        card: RateCard,
    ) -> Self {
        self.insert(kind, provider, card);
        self
    }

    /// Look up a provider row, failing with [`CostError::UnknownProvider`].
    pub fn provider<'a>(
        &'a self,
        kind: ComponentKind,
        provider: &'a str,
    ) -> Result<ProviderRates<'a>, CostError> {
        self.sheets
            .get(&kind)
            .and_then(|sheet| sheet.get(provider))
            .map(|card| ProviderRates {
                kind,
                provider,
                card,
            })
            .ok_or_else(|| CostError::UnknownProvider {
                kind,
                provider: provider.to_string(),
            })
    }

    /// Look up one validated rate of one provider.
    pub fn rate(&self, kind: ComponentKind, provider: &str, name: &str) -> Result<f64, CostError> {
        self.provider(kind, provider)?.rate(name)
    }

    /// Provider names of one sheet, in sorted order.
    pub fn providers(&self, kind: ComponentKind) -> impl Iterator<Item = (&str, &RateCard)> {
        self.sheets
            .get(&kind)
            .into_iter()
            .flat_map(|sheet| sheet.iter().map(|(name, card)| (name.as_str(), card)))
    }

    pub fn contains(&self, kind: ComponentKind, provider: &str) -> bool {
        self.sheets
            .get(&kind)
            .is_some_and(|sheet| sheet.contains_key(provider))
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.values().all(|sheet| sheet.is_empty())
    }

    /// Check every rate in the catalog.
    ///
    /// Fails on the first negative or non-finite rate. Kinds with no provider
    /// at all are allowed but logged, since any selection for them will fail.
    pub fn validate(&self) -> Result<(), CostError> {
        for kind in ComponentKind::iter() {
            let Some(sheet) = self.sheets.get(&kind).filter(|s| !s.is_empty()) else {
                warn!(%kind, "price catalog has no providers for component kind");
                continue;
            };
            for (provider, card) in sheet {
                for (name, value) in card.iter() {
                    check_rate(kind, provider, name, value)?;
                }
            }
        }
        Ok(())
    }
}

/// Rate card of one provider, carrying enough context for lookup errors.
#[derive(Debug, Clone, Copy)]
pub struct ProviderRates<'a> {
    kind: ComponentKind,
    provider: &'a str,
    card: &'a RateCard,
}

impl ProviderRates<'_> {
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn provider(&self) -> &str {
        self.provider
    }

    /// A present, finite, non-negative rate.
    pub fn rate(&self, name: &str) -> Result<f64, CostError> {
        let value = self.card.get(name).ok_or_else(|| CostError::MissingRate {
            kind: self.kind,
            provider: self.provider.to_string(),
            rate: name.to_string(),
        })?;
        check_rate(self.kind, self.provider, name, value)?;
        Ok(value)
    }

    /// A rate used as a divisor, which must also be non-zero.
    pub fn divisor(&self, name: &str) -> Result<f64, CostError> {
        let value = self.rate(name)?;
        if value == 0.0 {
            return Err(self.invalid(name, value));
        }
        Ok(value)
    }

    fn invalid(&self, name: &str, value: f64) -> CostError {
        CostError::InvalidRate {
            kind: self.kind,
            provider: self.provider.to_string(),
            rate: name.to_string(),
            value,
        }
    }
}

fn check_rate(kind: ComponentKind, provider: &str, name: &str, value: f64) -> Result<(), CostError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CostError::InvalidRate {
            kind,
            provider: provider.to_string(),
            rate: name.to_string(),
            value,
        });
    }
    Ok(())
}
