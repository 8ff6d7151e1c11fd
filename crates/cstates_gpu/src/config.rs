//! Configuration structs for GPU settings.
//!
//! Provides options for headless device creation and for the properties of
//! created states that descriptors do not carry (depth format, sample count).

/// Configuration for GPU context initialization.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Power preference for adapter selection.
    pub power_preference: wgpu::PowerPreference,
    /// Features requested from the device. Unsupported ones are dropped.
    pub features: wgpu::Features,
    /// Force the software fallback adapter.
    pub force_fallback_adapter: bool,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::default(),
            features: wgpu::Features::POLYGON_MODE_LINE
                | wgpu::Features::DEPTH_CLIP_CONTROL
                | wgpu::Features::ADDRESS_MODE_CLAMP_TO_BORDER,
            force_fallback_adapter: false,
        }
    }
}

impl GpuConfig {
    /// Create config requesting no optional features.
    pub fn minimal() -> Self {
        Self {
            features: wgpu::Features::empty(),
            ..Self::default()
        }
    }

    /// Set power preference.
    pub fn with_power_preference(mut self, pref: wgpu::PowerPreference) -> Self {
        self.power_preference = pref;
        self
    }

    /// Set the requested device features.
    pub fn with_features(mut self, features: wgpu::Features) -> Self {
        self.features = features;
        self
    }

    /// Use the software fallback adapter.
    pub fn with_fallback_adapter(mut self, force: bool) -> Self {
        self.force_fallback_adapter = force;
        self
    }
}

/// Properties applied to every state created by a
/// [`WgpuStateDevice`](crate::WgpuStateDevice).
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Format of the depth attachment depth-stencil states are used with.
    pub depth_format: wgpu::TextureFormat,
    /// Sample count used when a rasterizer state enables multisampling.
    pub sample_count: u32,
    /// Prefix for labels of created GPU objects.
    pub label: Option<String>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            depth_format: wgpu::TextureFormat::Depth32Float,
            sample_count: 1,
            label: None,
        }
    }
}

impl StateConfig {
    /// Set depth format.
    pub fn with_depth_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.depth_format = format;
        self
    }

    /// Set multisample count.
    pub fn with_sample_count(mut self, count: u32) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the label prefix.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub(crate) fn label_for(&self, object: &str) -> Option<String> {
        self.label.as_ref().map(|l| format!("{} {}", l, object))
    }
}
