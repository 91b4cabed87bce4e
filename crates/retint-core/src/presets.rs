//! Named parameter snapshots.
//!
//! A preset is always a complete [`AdjustmentParams`] record. Applying one
//! replaces every field; nothing is merged.

use serde::{Deserialize, Serialize};

use crate::error::RetintError;
use crate::transform::params::{AdjustmentParams, ToneCurve};

/// A named, complete set of adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub params: AdjustmentParams,
}

impl Preset {
    pub fn new(name: impl Into<String>, params: AdjustmentParams) -> Self {
        Self {
            name: name.into(),
            params: params.clamped(),
        }
    }
}

/// Ordered collection of presets, looked up by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
}

impl PresetLibrary {
    /// The presets shipped with retint.
    pub fn builtin() -> Self {
        let base = AdjustmentParams::default();
        let presets = vec![
            Preset::new(
                "Warm Sunset",
                AdjustmentParams {
                    temperature: 40.0,
                    tint: 5.0,
                    contrast: 10.0,
                    saturation: 15.0,
                    highlights: -10.0,
                    shadows: 10.0,
                    ..base
                },
            ),
            Preset::new(
                "Cool Breeze",
                AdjustmentParams {
                    temperature: -35.0,
                    tint: -5.0,
                    contrast: 5.0,
                    saturation: -10.0,
                    highlights: 5.0,
                    ..base
                },
            ),
            Preset::new(
                "Vintage Film",
                AdjustmentParams {
                    temperature: 20.0,
                    tint: 8.0,
                    contrast: -15.0,
                    saturation: -25.0,
                    midtones: 5.0,
                    shadows: 20.0,
                    blacks: 20.0,
                    rgb_curve: ToneCurve([10.0, 28.0, 50.0, 72.0, 92.0]),
                    ..base
                },
            ),
            Preset::new(
                "Noir",
                AdjustmentParams {
                    contrast: 45.0,
                    saturation: -100.0,
                    highlights: 10.0,
                    shadows: -20.0,
                    ..base
                },
            ),
            Preset::new(
                "Vivid",
                AdjustmentParams {
                    contrast: 20.0,
                    saturation: 40.0,
                    midtones: 5.0,
                    ..base
                },
            ),
            Preset::new(
                "Faded Matte",
                AdjustmentParams {
                    contrast: -30.0,
                    saturation: -15.0,
                    highlights: -15.0,
                    shadows: 25.0,
                    rgb_curve: ToneCurve([15.0, 30.0, 52.0, 74.0, 95.0]),
                    ..base
                },
            ),
        ];
        Self { presets }
    }

    /// Parse a JSON array of presets.
    pub fn from_json(json: &str) -> Result<Self, RetintError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        let presets = presets
            .into_iter()
            .map(|preset| Preset::new(preset.name, preset.params))
            .collect();
        Ok(Self { presets })
    }

    pub fn to_json(&self) -> Result<String, RetintError> {
        Ok(serde_json::to_string_pretty(&self.presets)?)
    }

    /// Add `other`'s presets; a preset with an existing name replaces it in place.
    pub fn merge(&mut self, other: PresetLibrary) {
        for preset in other.presets {
            self.insert(preset);
        }
    }

    pub fn insert(&mut self, preset: Preset) {
        match self.position(&preset.name) {
            Some(index) => self.presets[index] = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.position(name).map(|index| &self.presets[index])
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&Preset, RetintError> {
        self.get(name)
            .ok_or_else(|| RetintError::UnknownPreset(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|preset| preset.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.presets
            .iter()
            .position(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}
