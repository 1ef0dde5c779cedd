//! Columnar coalition storage
//!
//! Structure-of-arrays layout: one `Vec` per attribute, indexed by slot.
//! Bulk per-attribute passes (decay, renormalization, turnout) iterate a
//! single column instead of chasing per-coalition records.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::coalition::archetype::ArchetypeKind;
use crate::core::types::{
    CandidateId, CoalitionId, Demographics, JurisdictionId, JurisdictionTier, PartyId,
    PolicyQuestionId,
};
use crate::ideology::Ideology;

/// Flat, serializable view of one coalition
///
/// Rows are the interchange format for display and the edit tool; a store
/// rebuilt from its rows is identical in every static field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoalitionRow {
    pub id: CoalitionId,
    pub name: String,
    pub archetype: ArchetypeKind,
    pub ideology: Ideology,
    pub demographics: Demographics,
    pub size: f32,
    pub support_base: f32,
    pub volatility: f32,
    pub policy_stances: AHashMap<PolicyQuestionId, f32>,
    pub party_alignment: AHashMap<PartyId, f32>,
    pub mood: f32,
    pub satisfaction: f32,
    pub mobilization: f32,
}

/// Structure of Arrays for one jurisdiction's coalitions
pub struct CoalitionStore {
    pub jurisdiction: JurisdictionId,
    pub tier: JurisdictionTier,
    slots: AHashMap<CoalitionId, usize>,

    // Static columns, read-only after generation
    pub ids: Vec<CoalitionId>,
    pub names: Vec<String>,
    pub archetypes: Vec<ArchetypeKind>,
    pub ideologies: Vec<Ideology>,
    pub demographics: Vec<Demographics>,
    pub sizes: Vec<f32>,
    pub volatilities: Vec<f32>,
    pub policy_stances: Vec<AHashMap<PolicyQuestionId, f32>>,
    pub party_alignments: Vec<AHashMap<PartyId, f32>>,

    // Mutable columns, updated every tick
    pub support_bases: Vec<f32>,
    pub moods: Vec<f32>,
    pub satisfactions: Vec<f32>,
    pub mobilizations: Vec<f32>,

    // Per-coalition polling cache, recomputed lazily
    pub polling_cache: Vec<AHashMap<CandidateId, f32>>,
}

impl CoalitionStore {
    pub fn new(jurisdiction: JurisdictionId, tier: JurisdictionTier) -> Self {
        Self {
            jurisdiction,
            tier,
            slots: AHashMap::new(),
            ids: Vec::new(),
            names: Vec::new(),
            archetypes: Vec::new(),
            ideologies: Vec::new(),
            demographics: Vec::new(),
            sizes: Vec::new(),
            volatilities: Vec::new(),
            policy_stances: Vec::new(),
            party_alignments: Vec::new(),
            support_bases: Vec::new(),
            moods: Vec::new(),
            satisfactions: Vec::new(),
            mobilizations: Vec::new(),
            polling_cache: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: CoalitionId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Append one coalition; every column receives exactly one value
    pub fn push(&mut self, row: CoalitionRow) {
        let slot = self.ids.len();
        self.slots.insert(row.id, slot);
        self.ids.push(row.id);
        self.names.push(row.name);
        self.archetypes.push(row.archetype);
        self.ideologies.push(row.ideology);
        self.demographics.push(row.demographics);
        self.sizes.push(row.size);
        self.volatilities.push(row.volatility);
        self.policy_stances.push(row.policy_stances);
        self.party_alignments.push(row.party_alignment);
        self.support_bases.push(row.support_base);
        self.moods.push(row.mood);
        self.satisfactions.push(row.satisfaction);
        self.mobilizations.push(row.mobilization);
        self.polling_cache.push(AHashMap::new());
    }

    /// Flatten every coalition into its row form (polling cache excluded)
    pub fn to_rows(&self) -> Vec<CoalitionRow> {
        (0..self.len())
            .map(|i| CoalitionRow {
                id: self.ids[i],
                name: self.names[i].clone(),
                archetype: self.archetypes[i],
                ideology: self.ideologies[i],
                demographics: self.demographics[i],
                size: self.sizes[i],
                support_base: self.support_bases[i],
                volatility: self.volatilities[i],
                policy_stances: self.policy_stances[i].clone(),
                party_alignment: self.party_alignments[i].clone(),
                mood: self.moods[i],
                satisfaction: self.satisfactions[i],
                mobilization: self.mobilizations[i],
            })
            .collect()
    }

    /// Rebuild a store from rows produced by [`CoalitionStore::to_rows`]
    pub fn from_rows(
        jurisdiction: JurisdictionId,
        tier: JurisdictionTier,
        rows: Vec<CoalitionRow>,
    ) -> Self {
        let mut store = Self::new(jurisdiction, tier);
        for row in rows {
            store.push(row);
        }
        store
    }

    /// Rescale support bases so they sum to 1.0
    ///
    /// Runs after every mutation that can change support bases; a store
    /// whose bases all collapsed to zero is left untouched rather than
    /// divided by zero.
    pub fn normalize_support_bases(&mut self) {
        let total: f32 = self.support_bases.iter().sum();
        if total > f32::EPSILON && total.is_finite() {
            for base in &mut self.support_bases {
                *base /= total;
            }
        }
    }

    /// Sum of support bases (1.0 within tolerance when the invariant holds)
    pub fn support_base_sum(&self) -> f32 {
        self.support_bases.iter().sum()
    }

    pub fn cached_score(&self, slot: usize, candidate: CandidateId) -> Option<f32> {
        self.polling_cache[slot].get(&candidate).copied()
    }

    pub fn cache_score(&mut self, slot: usize, candidate: CandidateId, score: f32) {
        self.polling_cache[slot].insert(candidate, score);
    }

    pub fn clear_polling_cache(&mut self) {
        for cache in &mut self.polling_cache {
            cache.clear();
        }
    }
}
