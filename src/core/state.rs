use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum ScenePhase {
    /// Camera flies in from above, orbit controls are disabled
    #[default]
    Intro,
    Explore,
}
