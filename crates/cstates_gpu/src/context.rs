use crate::config::{GpuConfig, StateConfig};
use crate::device::WgpuStateDevice;
use crate::error::Result;

/// Headless GPU context owning the wgpu device and queue.
pub struct GpuContext {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: GpuConfig,
}

impl GpuContext {
    /// Initialize a GPU context with default configuration.
    ///
    /// This is async like the wgpu requests behind it; native callers can use
    /// `pollster::block_on()`.
    pub async fn new() -> Result<Self> {
        Self::with_config(GpuConfig::default()).await
    }

    /// Initialize a GPU context with custom configuration.
    pub async fn with_config(config: GpuConfig) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: config.power_preference,
                compatible_surface: None,
                force_fallback_adapter: config.force_fallback_adapter,
            })
            .await?;

        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        // Only ask for what the adapter can give, so a missing optional
        // feature surfaces as a state creation error instead of a device error.
        let required_features = config.features & adapter.features();
        if required_features != config.features {
            log::debug!(
                "Adapter supports only {:?} of requested features {:?}",
                required_features,
                config.features
            );
        }

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Common States Device"),
                required_features,
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        Ok(Self {
            adapter,
            device,
            queue,
            config,
        })
    }

    /// State device with default [`StateConfig`].
    pub fn state_device(&self) -> WgpuStateDevice<'_> {
        WgpuStateDevice::new(&self.device, StateConfig::default())
    }

    /// State device with custom [`StateConfig`].
    pub fn state_device_with_config(&self, config: StateConfig) -> WgpuStateDevice<'_> {
        WgpuStateDevice::new(&self.device, config)
    }
}
