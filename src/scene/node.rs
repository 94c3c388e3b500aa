use crate::scene::transform::Transform;

/// A scene entity whose transform can be animated.
///
/// Nodes are created and destroyed by the host; animators only hold a
/// [`NodeHandle`](crate::scene::NodeHandle) to them.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name, used in log output.
    pub name: String,
    pub transform: Transform,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            transform: Transform::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
