//! Host Object Model
//!
//! The minimal scene graph an [`OrnamentAnimator`](crate::OrnamentAnimator)
//! is embedded in:
//! - [`Node`]: a scene entity with a [`Transform`]
//! - [`Material`]: a tinted surface shared by reference
//! - [`Scene`]: arenas of nodes, materials and audio players, plus the
//!   per-node audio attachments
//!
//! Everything is addressed by `slotmap` handles. The animator stores
//! handles only and resolves them against `&mut Scene` on every call.

pub mod material;
pub mod node;
pub mod scene;
pub mod transform;

pub use material::Material;
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MaterialHandle;
    pub struct AudioHandle;
}
