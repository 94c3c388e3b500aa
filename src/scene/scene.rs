use slotmap::{SlotMap, SparseSecondaryMap};

use crate::audio::AudioPlayer;
use crate::errors::{OrnamentError, Result};
use crate::scene::material::Material;
use crate::scene::node::Node;
use crate::scene::{AudioHandle, MaterialHandle, NodeHandle};

/// Host world.
///
/// Owns every engine-managed object the animator touches. Nodes and
/// materials are plain data; audio players are boxed trait objects so
/// hosts can plug in any backend.
///
/// Audio players are attached to nodes through a sparse component map,
/// mirroring "the audio source on the same object".
#[derive(Default)]
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    materials: SlotMap<MaterialHandle, Material>,
    audio_players: SlotMap<AudioHandle, Box<dyn AudioPlayer>>,

    audio_attachments: SparseSecondaryMap<NodeHandle, AudioHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        self.nodes.insert(node)
    }

    /// Removes a node and its audio attachment. The attached player itself
    /// stays in the scene.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        self.audio_attachments.remove(handle);
        self.nodes.remove(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    pub fn node(&self, handle: NodeHandle) -> Result<&Node> {
        self.nodes.get(handle).ok_or(OrnamentError::NodeNotFound(handle))
    }

    /// Refreshes the cached local matrix of every node.
    /// Returns how many nodes changed since the previous call.
    pub fn update_transforms(&mut self) -> usize {
        self.nodes
            .values_mut()
            .map(|node| node.transform.update_local_matrix())
            .filter(|changed| *changed)
            .count()
    }

    // ========================================================================
    // Materials
    // ========================================================================

    pub fn add_material(&mut self, material: Material) -> MaterialHandle {
        self.materials.insert(material)
    }

    #[inline]
    #[must_use]
    pub fn get_material(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle)
    }

    #[inline]
    pub fn get_material_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.materials.get_mut(handle)
    }

    pub fn material(&self, handle: MaterialHandle) -> Result<&Material> {
        self.materials
            .get(handle)
            .ok_or(OrnamentError::MaterialNotFound(handle))
    }

    // ========================================================================
    // Audio
    // ========================================================================

    pub fn add_audio(&mut self, player: impl AudioPlayer + 'static) -> AudioHandle {
        self.audio_players.insert(Box::new(player))
    }

    /// Attaches an audio player to a node, replacing any previous one.
    /// Returns `false` if either handle is stale.
    pub fn attach_audio(&mut self, node: NodeHandle, audio: AudioHandle) -> bool {
        if !self.nodes.contains_key(node) || !self.audio_players.contains_key(audio) {
            return false;
        }
        self.audio_attachments.insert(node, audio);
        true
    }

    /// The audio player attached to `node`, if any.
    #[must_use]
    pub fn audio_of(&self, node: NodeHandle) -> Option<AudioHandle> {
        self.audio_attachments.get(node).copied()
    }

    #[must_use]
    pub fn get_audio(&self, handle: AudioHandle) -> Option<&dyn AudioPlayer> {
        self.audio_players.get(handle).map(|player| &**player)
    }

    pub fn get_audio_mut(
        &mut self,
        handle: AudioHandle,
    ) -> Option<&mut (dyn AudioPlayer + 'static)> {
        self.audio_players.get_mut(handle).map(|player| &mut **player)
    }

    pub fn audio(&self, handle: AudioHandle) -> Result<&dyn AudioPlayer> {
        self.get_audio(handle)
            .ok_or(OrnamentError::AudioNotFound(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioSource, PlaybackState};

    #[test]
    fn removing_node_drops_audio_attachment() {
        let mut scene = Scene::new();
        let node = scene.add_node(Node::new());
        let audio = scene.add_audio(AudioSource::new("theme"));

        assert!(scene.attach_audio(node, audio));
        assert_eq!(scene.audio_of(node), Some(audio));

        scene.remove_node(node);
        assert_eq!(scene.audio_of(node), None);
        assert!(scene.get_audio(audio).is_some());
    }

    #[test]
    fn attach_rejects_stale_handles() {
        let mut scene = Scene::new();
        let node = scene.add_node(Node::new());
        let audio = scene.add_audio(AudioSource::new("theme"));
        scene.remove_node(node);

        assert!(!scene.attach_audio(node, audio));
    }

    #[test]
    fn lookup_errors_name_the_handle() {
        let mut scene = Scene::new();
        let node = scene.add_node(Node::new());
        scene.remove_node(node);

        let err = scene.node(node).unwrap_err();
        assert!(matches!(err, OrnamentError::NodeNotFound(h) if h == node));
    }

    #[test]
    fn audio_players_are_reachable_mutably() {
        let mut scene = Scene::new();
        let audio = scene.add_audio(AudioSource::new("theme"));

        scene.get_audio_mut(audio).unwrap().play();
        assert_eq!(scene.audio(audio).unwrap().state(), PlaybackState::Playing);
    }

    #[test]
    fn update_transforms_reports_changed_nodes() {
        let mut scene = Scene::new();
        let a = scene.add_node(Node::new());
        scene.add_node(Node::new());

        // Fresh transforms are always dirty.
        assert_eq!(scene.update_transforms(), 2);
        assert_eq!(scene.update_transforms(), 0);

        scene.get_node_mut(a).unwrap().transform.set_uniform_scale(2.0);
        assert_eq!(scene.update_transforms(), 1);
    }
}
