//! Ornament Animator
//!
//! [`OrnamentAnimator`] spins a visual node about its forward axis and
//! eases the node's uniform scale and its material tint toward targets set
//! from outside (a timeline, UI, or script). It also forwards play / pause
//! / stop to an attached audio player, skipping redundant commands.
//!
//! # Lifecycle
//!
//! 1. Create with [`OrnamentAnimator::new`] and bind handles with the
//!    `with_*` builders
//! 2. Call [`start`](OrnamentAnimator::start) once the scene is populated
//! 3. Call [`tick`](OrnamentAnimator::tick) once per frame from the host loop
//!
//! ```rust,ignore
//! let mut animator = OrnamentAnimator::new(AnimatorSettings::default())
//!     .attached_to(host)
//!     .with_node(ornament)
//!     .with_material(tint);
//!
//! animator.start(&mut scene);
//! loop {
//!     animator.tick(timer.dt_seconds(), &mut scene);
//! }
//! ```
//!
//! # Degraded mode
//!
//! Nothing here fails. A missing node is reported once by `start` and
//! turns every tick into a no-op; a missing audio player turns the
//! playback methods into no-ops. Setters always succeed.

use glam::Vec4;

use crate::animator::complexity::{Complexity, LogShapeGenerator, ShapeGenerator};
use crate::animator::sequencer::Sequencer;
use crate::animator::smoothing::Interpolatable;
use crate::audio::AudioPlayer;
use crate::config::AnimatorSettings;
use crate::errors::{OrnamentError, Result};
use crate::scene::{AudioHandle, MaterialHandle, NodeHandle, Scene};

/// Mutable animation state owned by the animator.
#[derive(Debug, Clone, PartialEq)]
struct AnimatorState {
    current_scale: f32,
    target_scale: f32,
    target_color: Vec4,
    complexity: Complexity,
    /// Degrees per second.
    rotation_speed: f32,
}

impl AnimatorState {
    fn from_settings(settings: &AnimatorSettings) -> Self {
        Self {
            current_scale: settings.initial_scale,
            target_scale: settings.initial_scale,
            target_color: settings.initial_color,
            complexity: settings.complexity(),
            rotation_speed: settings.rotation_speed as f32,
        }
    }
}

pub struct OrnamentAnimator {
    settings: AnimatorSettings,
    state: AnimatorState,

    /// Node this component lives on; its audio player is used when no
    /// explicit one is bound.
    owner: Option<NodeHandle>,
    node: Option<NodeHandle>,
    material: Option<MaterialHandle>,
    audio: Option<AudioHandle>,

    sequencer: Option<Box<dyn Sequencer>>,
    shape_generator: Box<dyn ShapeGenerator>,

    started: bool,
    animating: bool,
}

impl OrnamentAnimator {
    #[must_use]
    pub fn new(settings: AnimatorSettings) -> Self {
        let state = AnimatorState::from_settings(&settings);
        Self {
            settings,
            state,
            owner: None,
            node: None,
            material: None,
            audio: None,
            sequencer: None,
            shape_generator: Box::new(LogShapeGenerator),
            started: false,
            animating: false,
        }
    }

    // ========================================================================
    // Binding
    // ========================================================================

    #[must_use]
    pub fn attached_to(mut self, owner: NodeHandle) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn with_node(mut self, node: NodeHandle) -> Self {
        self.node = Some(node);
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: MaterialHandle) -> Self {
        self.material = Some(material);
        self
    }

    #[must_use]
    pub fn with_audio(mut self, audio: AudioHandle) -> Self {
        self.audio = Some(audio);
        self
    }

    #[must_use]
    pub fn with_sequencer(mut self, sequencer: impl Sequencer + 'static) -> Self {
        self.sequencer = Some(Box::new(sequencer));
        self
    }

    #[must_use]
    pub fn with_shape_generator(mut self, generator: impl ShapeGenerator + 'static) -> Self {
        self.shape_generator = Box::new(generator);
        self
    }

    /// Binds a visual node after construction, e.g. to recover from a
    /// missing node at start. Once started, a valid node resumes animation
    /// from the current state.
    pub fn bind_node(&mut self, scene: &Scene, node: NodeHandle) -> Result<()> {
        scene.node(node)?;
        self.node = Some(node);
        if self.started {
            self.animating = true;
        }
        Ok(())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Initializes the animator against the scene.
    ///
    /// Acquires the owner's audio player if none is bound (or the bound
    /// one is gone), resets scale
    /// and tint to their configured initial values, and notifies the
    /// sequencer. Calling it again has no effect.
    pub fn start(&mut self, scene: &mut Scene) {
        if self.started {
            log::warn!("OrnamentAnimator::start called twice; ignoring");
            return;
        }
        self.started = true;

        self.acquire_audio(scene);

        match self.resolve_node(scene) {
            Ok(()) => {
                self.animating = true;
                self.state.current_scale = self.settings.initial_scale;
                self.state.target_scale = self.settings.initial_scale;

                if let Some(handle) = self.material {
                    if let Some(material) = scene.get_material_mut(handle) {
                        material.set_color(self.settings.initial_color);
                        self.state.target_color = self.settings.initial_color;
                    } else {
                        log::warn!("{}", OrnamentError::MaterialNotFound(handle));
                        self.material = None;
                    }
                }
            }
            Err(err) => {
                log::error!("{err}");
                self.animating = false;
            }
        }

        if let Some(sequencer) = self.sequencer.as_mut() {
            sequencer.on_animator_start();
        }
    }

    fn resolve_node(&self, scene: &Scene) -> Result<()> {
        let handle = self.node.ok_or(OrnamentError::NodeUnassigned)?;
        let node = scene.node(handle)?;
        log::debug!("Animating node '{}'", node.name);
        Ok(())
    }

    fn acquire_audio(&mut self, scene: &Scene) {
        match self.audio {
            Some(handle) => {
                if let Err(err) = scene.audio(handle) {
                    log::warn!("{err}");
                    self.audio = self.owner.and_then(|owner| scene.audio_of(owner));
                }
            }
            None => {
                self.audio = self.owner.and_then(|owner| scene.audio_of(owner));
            }
        }
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// Rotates the node by `rotation_speed * dt` degrees about its local
    /// Z axis, then moves scale and tint toward their targets. Does nothing
    /// before [`start`](Self::start) or when no node is bound.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) {
        if !self.animating {
            return;
        }
        let Some(node) = self.node.and_then(|handle| scene.get_node_mut(handle)) else {
            return;
        };

        let angle = (self.state.rotation_speed * dt).to_radians();
        node.transform.rotate_local_z(angle);

        self.state.current_scale = self
            .state
            .current_scale
            .smooth_toward(self.state.target_scale, dt);
        node.transform.set_uniform_scale(self.state.current_scale);

        if let Some(material) = self.material.and_then(|handle| scene.get_material_mut(handle)) {
            let color = material.color().smooth_toward(self.state.target_color, dt);
            material.set_color(color);
        }
    }

    // ========================================================================
    // Targets
    // ========================================================================

    /// Sets the scale the node eases toward. Not validated.
    pub fn set_scale(&mut self, scale: f32) {
        self.state.target_scale = scale;
    }

    /// Sets the RGBA tint the material eases toward. Not validated.
    pub fn set_color(&mut self, color: Vec4) {
        self.state.target_color = color;
    }

    /// Clamps and stores the pattern complexity, then rebuilds the shape.
    pub fn set_complexity(&mut self, segments: i32, layers: i32) {
        self.state.complexity = Complexity::new(segments, layers);
        self.shape_generator.rebuild(self.state.complexity);
    }

    // ========================================================================
    // Audio
    // ========================================================================

    fn audio_player<'a>(
        &self,
        scene: &'a mut Scene,
    ) -> Option<&'a mut (dyn AudioPlayer + 'static)> {
        let handle = self.audio?;
        scene.get_audio_mut(handle)
    }

    /// Starts playback unless the player is already playing.
    pub fn play_audio(&self, scene: &mut Scene) {
        if let Some(player) = self.audio_player(scene)
            && !player.is_playing()
        {
            player.play();
        }
    }

    /// Pauses playback only while playing.
    pub fn pause_audio(&self, scene: &mut Scene) {
        if let Some(player) = self.audio_player(scene)
            && player.is_playing()
        {
            player.pause();
        }
    }

    /// Stops playback.
    pub fn stop_audio(&self, scene: &mut Scene) {
        if let Some(player) = self.audio_player(scene) {
            player.stop();
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn current_scale(&self) -> f32 {
        self.state.current_scale
    }

    #[inline]
    #[must_use]
    pub fn target_scale(&self) -> f32 {
        self.state.target_scale
    }

    #[inline]
    #[must_use]
    pub fn target_color(&self) -> Vec4 {
        self.state.target_color
    }

    #[inline]
    #[must_use]
    pub fn complexity(&self) -> Complexity {
        self.state.complexity
    }

    /// Degrees per second.
    #[inline]
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.state.rotation_speed
    }

    /// Whether ticks currently animate a node.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[inline]
    #[must_use]
    pub fn node(&self) -> Option<NodeHandle> {
        self.node
    }

    #[inline]
    #[must_use]
    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }

    #[inline]
    #[must_use]
    pub fn audio(&self) -> Option<AudioHandle> {
        self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Node;

    #[test]
    fn state_is_seeded_from_settings_before_start() {
        let settings = AnimatorSettings {
            rotation_speed: 30,
            initial_scale: 0.5,
            segments: 40,
            ..Default::default()
        };
        let animator = OrnamentAnimator::new(settings);

        assert_eq!(animator.current_scale(), 0.5);
        assert_eq!(animator.target_scale(), 0.5);
        assert_eq!(animator.rotation_speed(), 30.0);
        assert_eq!(animator.complexity(), Complexity { segments: 24, layers: 3 });
        assert!(!animator.is_animating());
    }

    #[test]
    fn tick_before_start_is_inert() {
        let mut scene = Scene::new();
        let node = scene.add_node(Node::new());
        let mut animator = OrnamentAnimator::new(AnimatorSettings::default()).with_node(node);

        animator.tick(1.0, &mut scene);
        assert_eq!(scene.get_node(node).unwrap().transform.rotation, glam::Quat::IDENTITY);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut scene = Scene::new();
        let node = scene.add_node(Node::new());
        let mut animator = OrnamentAnimator::new(AnimatorSettings::default()).with_node(node);

        animator.start(&mut scene);
        animator.set_scale(3.0);
        animator.start(&mut scene);

        assert_eq!(animator.target_scale(), 3.0);
    }
}
