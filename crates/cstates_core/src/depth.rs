//! Depth-stencil state descriptors and presets.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STENCIL_READ_MASK: u8 = 0xff;
pub const DEFAULT_STENCIL_WRITE_MASK: u8 = 0xff;

/// Comparison used by depth tests, stencil tests and comparison samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthWriteMask {
    Zero,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StencilOp {
    Keep,
    Zero,
    Replace,
    IncrSat,
    DecrSat,
    Invert,
    Incr,
    Decr,
}

/// Stencil operations for one triangle facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StencilFaceDesc {
    pub fail_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub pass_op: StencilOp,
    pub func: ComparisonFunc,
}

impl StencilFaceDesc {
    /// Always passes and leaves the stencil buffer untouched.
    pub const KEEP: StencilFaceDesc = StencilFaceDesc {
        fail_op: StencilOp::Keep,
        depth_fail_op: StencilOp::Keep,
        pass_op: StencilOp::Keep,
        func: ComparisonFunc::Always,
    };
}

/// Depth-stencil configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthStencilDesc {
    pub depth_enable: bool,
    pub depth_write_mask: DepthWriteMask,
    pub depth_func: ComparisonFunc,
    pub stencil_enable: bool,
    pub stencil_read_mask: u8,
    pub stencil_write_mask: u8,
    pub front_face: StencilFaceDesc,
    pub back_face: StencilFaceDesc,
}

impl DepthStencilDesc {
    /// Build a depth descriptor testing with `LessEqual` and stencil disabled.
    pub fn new(enable: bool, write_enable: bool) -> Self {
        Self {
            depth_enable: enable,
            depth_write_mask: if write_enable {
                DepthWriteMask::All
            } else {
                DepthWriteMask::Zero
            },
            depth_func: ComparisonFunc::LessEqual,
            stencil_enable: false,
            stencil_read_mask: DEFAULT_STENCIL_READ_MASK,
            stencil_write_mask: DEFAULT_STENCIL_WRITE_MASK,
            front_face: StencilFaceDesc::KEEP,
            back_face: StencilFaceDesc::KEEP,
        }
    }

    pub fn depth_write_enabled(&self) -> bool {
        self.depth_write_mask == DepthWriteMask::All
    }
}

/// Named depth-stencil presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthPreset {
    /// No depth test, no depth writes.
    DepthNone,
    /// Test and write.
    DepthDefault,
    /// Test without writing.
    DepthRead,
}

impl DepthPreset {
    pub const ALL: [DepthPreset; 3] = [
        DepthPreset::DepthNone,
        DepthPreset::DepthDefault,
        DepthPreset::DepthRead,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DepthPreset::DepthNone => "depth_none",
            DepthPreset::DepthDefault => "depth_default",
            DepthPreset::DepthRead => "depth_read",
        }
    }

    /// `(depth test, depth write)` flags fixed by this preset.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            DepthPreset::DepthNone => (false, false),
            DepthPreset::DepthDefault => (true, true),
            DepthPreset::DepthRead => (true, false),
        }
    }

    pub fn desc(&self) -> DepthStencilDesc {
        let (enable, write_enable) = self.flags();
        DepthStencilDesc::new(enable, write_enable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_presets() {
        let none = DepthPreset::DepthNone.desc();
        assert!(!none.depth_enable);
        assert!(!none.depth_write_enabled());

        let default = DepthPreset::DepthDefault.desc();
        assert!(default.depth_enable);
        assert!(default.depth_write_enabled());

        let read = DepthPreset::DepthRead.desc();
        assert!(read.depth_enable);
        assert_eq!(read.depth_write_mask, DepthWriteMask::Zero);
    }

    #[test]
    fn test_fixed_fields() {
        for preset in DepthPreset::ALL {
            let desc = preset.desc();
            assert_eq!(desc.depth_func, ComparisonFunc::LessEqual, "{}", preset.name());
            assert!(!desc.stencil_enable);
            assert_eq!(desc.stencil_read_mask, 0xff);
            assert_eq!(desc.stencil_write_mask, 0xff);
            assert_eq!(desc.front_face, desc.back_face);
            assert_eq!(desc.front_face.func, ComparisonFunc::Always);
            assert_eq!(desc.front_face.pass_op, StencilOp::Keep);
            assert_eq!(desc.front_face.fail_op, StencilOp::Keep);
            assert_eq!(desc.front_face.depth_fail_op, StencilOp::Keep);
        }
    }
}
