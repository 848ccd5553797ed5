use bevy::prelude::Resource;

/// Cues fired once by the scene timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCue {
    StopOrbit,
}

/// Which panel is open and whether the markers orbit.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneControls {
    orbiting: bool,
    active_section: Option<String>,
    intro_finished: bool,
}

impl Default for SceneControls {
    fn default() -> Self {
        Self {
            orbiting: true,
            active_section: None,
            intro_finished: false,
        }
    }
}

impl SceneControls {
    pub fn orbiting(&self) -> bool {
        self.orbiting
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section() == Some(id)
    }

    pub fn intro_finished(&self) -> bool {
        self.intro_finished
    }

    /// Open `id`, or close it if it is already the open section
    pub fn toggle_section(&mut self, id: &str) {
        if self.is_active(id) {
            self.active_section = None;
        } else {
            self.active_section = Some(id.to_string());
        }
    }

    /// Returns whether a panel was actually open
    pub fn close_section(&mut self) -> bool {
        self.active_section.take().is_some()
    }

    pub fn toggle_orbit(&mut self) {
        self.orbiting = !self.orbiting;
    }

    pub fn finish_intro(&mut self) {
        self.intro_finished = true;
    }

    /// Fly the intro again with the markers back in orbit
    pub fn replay(&mut self) {
        self.intro_finished = false;
        self.orbiting = true;
    }

    pub fn apply(&mut self, cue: SceneCue) {
        match cue {
            SceneCue::StopOrbit => self.orbiting = false,
        }
    }
}
