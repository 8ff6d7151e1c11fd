//! Creates every preset on a device and records the outcome.

use cstates_core::{
    BlendDesc, BlendPreset, CommonStates, DepthPreset, DepthStencilDesc, RasterizerDesc,
    RasterizerPreset, SamplerDesc, SamplerPreset, StateDevice, StateKind,
};
use serde::Serialize;

/// Descriptor a preset was created from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Descriptor {
    Blend(BlendDesc),
    DepthStencil(DepthStencilDesc),
    Rasterizer(RasterizerDesc),
    Sampler(SamplerDesc),
}

/// Outcome of creating one preset.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeEntry {
    pub family: StateKind,
    pub preset: &'static str,
    pub descriptor: Descriptor,
    /// Device error message, `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeEntry {
    fn new<T, E: std::error::Error>(
        family: StateKind,
        preset: &'static str,
        descriptor: Descriptor,
        result: Result<T, E>,
    ) -> Self {
        Self {
            family,
            preset,
            descriptor,
            error: result.err().map(|e| e.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
    pub entries: Vec<ProbeEntry>,
}

impl ProbeReport {
    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = Some(adapter.into());
        self
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProbeEntry> {
        self.entries.iter().filter(|e| !e.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// Create every blend, depth-stencil, rasterizer and sampler preset once.
///
/// Created states are dropped right away; only descriptors and errors are kept.
pub fn run<D: StateDevice>(states: &CommonStates<'_, D>) -> ProbeReport {
    let mut entries = Vec::new();

    for preset in BlendPreset::ALL {
        entries.push(ProbeEntry::new(
            StateKind::Blend,
            preset.name(),
            Descriptor::Blend(preset.desc()),
            states.blend(preset),
        ));
    }

    for preset in DepthPreset::ALL {
        entries.push(ProbeEntry::new(
            StateKind::DepthStencil,
            preset.name(),
            Descriptor::DepthStencil(preset.desc()),
            states.depth_stencil(preset),
        ));
    }

    for preset in RasterizerPreset::ALL {
        entries.push(ProbeEntry::new(
            StateKind::Rasterizer,
            preset.name(),
            Descriptor::Rasterizer(preset.desc()),
            states.rasterizer(preset),
        ));
    }

    for preset in SamplerPreset::ALL {
        entries.push(ProbeEntry::new(
            StateKind::Sampler,
            preset.name(),
            Descriptor::Sampler(preset.desc()),
            states.sampler(preset),
        ));
    }

    let report = ProbeReport {
        adapter: None,
        entries,
    };
    log::info!(
        "Probed {} presets, {} failed",
        report.entries.len(),
        report.failure_count()
    );
    report
}
