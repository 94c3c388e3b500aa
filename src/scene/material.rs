use glam::Vec4;

/// A tinted surface.
///
/// Every color write bumps [`version`](Self::version), so hosts can skip
/// re-uploading unchanged materials.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    color: Vec4,
    version: u64,
}

impl Material {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            name: String::new(),
            color,
            version: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// RGBA tint.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
        self.version = self.version.wrapping_add(1);
    }

    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
