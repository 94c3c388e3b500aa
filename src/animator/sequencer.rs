/// An external timeline that drives the animator through its setters.
///
/// The animator only notifies the sequencer once it has started; timeline
/// playback and synchronization with audio stay on the host side.
pub trait Sequencer {
    fn on_animator_start(&mut self) {}
}
