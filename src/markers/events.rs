use bevy::prelude::*;

#[derive(Message)]
pub struct MarkerClicked {
    pub marker: Entity,
}
