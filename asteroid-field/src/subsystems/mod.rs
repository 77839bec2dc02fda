pub mod collision_handling;
pub mod entity_spawning;
pub mod game_flow;
pub mod object_positioning;
pub mod player_controls_handling;
pub mod rendering;
pub mod star_field;
